//! Cookie de sessão `auth-token`

use axum::http::{header, HeaderMap};

pub const AUTH_COOKIE: &str = "auth-token";

/// Validade do cookie de sessão: 7 dias (igual ao TTL do token)
pub const SESSION_MAX_AGE_SECS: i64 = 7 * 24 * 60 * 60;

/// Monta o valor de `Set-Cookie` para a sessão
pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Max-Age={}; Path=/; HttpOnly; SameSite=Lax",
        AUTH_COOKIE, token, max_age_secs
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Monta o `Set-Cookie` que remove a sessão no cliente (Max-Age=0)
pub fn clear_cookie(secure: bool) -> String {
    session_cookie("", 0, secure)
}

/// Extrai o token de sessão do header `Cookie`
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;

    for cookie in cookie_header.split(';') {
        let mut parts = cookie.trim().splitn(2, '=');
        if parts.next() == Some(AUTH_COOKIE) {
            let value = parts.next().unwrap_or("");
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_session_cookie_atributos() {
        let cookie = session_cookie("abc123", SESSION_MAX_AGE_SECS, false);
        assert!(cookie.starts_with("auth-token=abc123;"));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_session_cookie_secure_em_producao() {
        let cookie = session_cookie("abc123", SESSION_MAX_AGE_SECS, true);
        assert!(cookie.ends_with("; Secure"));
    }

    #[test]
    fn test_clear_cookie_zera_max_age() {
        let cookie = clear_cookie(false);
        assert!(cookie.starts_with("auth-token=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
    }

    #[test]
    fn test_extract_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("tema=escuro; auth-token=meu-jwt; outro=1"),
        );
        assert_eq!(extract_token(&headers), Some("meu-jwt".to_string()));
    }

    #[test]
    fn test_extract_token_ausente() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("tema=escuro"));
        assert_eq!(extract_token(&headers), None);
        assert_eq!(extract_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_extract_token_vazio_e_ignorado() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("auth-token="));
        assert_eq!(extract_token(&headers), None);
    }
}
