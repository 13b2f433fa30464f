//! Página raiz: verificação de sessão e redirecionamento
//!
//! Tela de carregamento estática; o script faz exatamente uma chamada a
//! `/api/auth/me` e navega para o dashboard ou para o login.

use axum::response::Html;

pub async fn index_page() -> Html<&'static str> {
    Html(BOOTSTRAP_PAGE)
}

const BOOTSTRAP_PAGE: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <title>CRM Previdenciário</title>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Arial, sans-serif;
               margin: 0; min-height: 100vh; display: flex; align-items: center;
               justify-content: center; background: #f5f5f5; }
        .container { text-align: center; }
        .spinner { width: 48px; height: 48px; margin: 0 auto 20px;
                   border: 4px solid #e0e0e0; border-top-color: #1d4ed8;
                   border-radius: 50%; animation: girar 0.8s linear infinite; }
        h1 { color: #1d4ed8; font-size: 22px; margin: 0 0 8px; }
        p { color: #666; font-size: 14px; margin: 0; }
        @keyframes girar { to { transform: rotate(360deg); } }
    </style>
    <script>
        // Uma única tentativa: 200 vai para o dashboard, o resto para o login
        fetch('/api/auth/me')
            .then((res) => {
                window.location.href = res.ok ? '/dashboard' : '/login';
            })
            .catch(() => {
                window.location.href = '/login';
            });
    </script>
</head>
<body>
    <div class="container">
        <div class="spinner"></div>
        <h1>CRM Previdenciário</h1>
        <p>Carregando...</p>
    </div>
</body>
</html>
"#;
