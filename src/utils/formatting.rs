/// Utilitários de formatação para exibição (moeda, data, CPF/CNPJ, cores)
///
/// Funções puras, sem validação: entrada fora do formato esperado é
/// devolvida sem alteração.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static CPF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{3})(\d{3})(\d{3})(\d{2})$").expect("regex CPF inválida"));

static CNPJ_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2})(\d{3})(\d{3})(\d{4})(\d{2})$").expect("regex CNPJ inválida"));

/// Formata um valor em reais no padrão brasileiro (`R$ 1.234,56`)
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let integer = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{}R$ {},{:02}", if negative { "-" } else { "" }, grouped, fraction)
}

/// Formata uma data no padrão brasileiro (`dd/mm/aaaa`)
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Formata um CPF de 11 dígitos (`123.456.789-09`)
///
/// Entrada que não seja exatamente 11 dígitos é devolvida sem alteração.
pub fn format_cpf(cpf: &str) -> String {
    match CPF_RE.captures(cpf) {
        Some(c) => format!("{}.{}.{}-{}", &c[1], &c[2], &c[3], &c[4]),
        None => cpf.to_string(),
    }
}

/// Formata um CNPJ de 14 dígitos (`12.345.678/0001-95`)
///
/// Entrada que não seja exatamente 14 dígitos é devolvida sem alteração.
pub fn format_cnpj(cnpj: &str) -> String {
    match CNPJ_RE.captures(cnpj) {
        Some(c) => format!("{}.{}.{}/{}-{}", &c[1], &c[2], &c[3], &c[4], &c[5]),
        None => cnpj.to_string(),
    }
}

/// Classe CSS para o status do caso previdenciário
pub fn status_color(status: &str) -> &'static str {
    match status {
        "consulta_inicial" => "bg-blue-100 text-blue-800",
        "documentacao_pendente" => "bg-yellow-100 text-yellow-800",
        "analise_caso" => "bg-purple-100 text-purple-800",
        "protocolo_inss" => "bg-orange-100 text-orange-800",
        "aguardando_resposta" => "bg-cyan-100 text-cyan-800",
        "recurso_contestacao" => "bg-pink-100 text-pink-800",
        "deferido" => "bg-green-100 text-green-800",
        "indeferido" => "bg-red-100 text-red-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

/// Classe CSS para a especialidade do caso
pub fn category_color(category: &str) -> &'static str {
    match category {
        "aposentadoria" => "bg-indigo-100 text-indigo-800",
        "auxilio_doenca" => "bg-teal-100 text-teal-800",
        "auxilio_acidente" => "bg-amber-100 text-amber-800",
        "bpc_loas" => "bg-lime-100 text-lime-800",
        "pensao_por_morte" => "bg-violet-100 text-violet-800",
        "salario_maternidade" => "bg-rose-100 text-rose-800",
        "revisao_beneficio" => "bg-sky-100 text-sky-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(1320.0), "R$ 1.320,00");
        assert_eq!(format_currency(1234.56), "R$ 1.234,56");
        assert_eq!(format_currency(1_234_567.89), "R$ 1.234.567,89");
        assert_eq!(format_currency(-98.5), "-R$ 98,50");
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 7, 15, 30, 0).unwrap();
        assert_eq!(format_date(&date), "07/03/2024");
    }

    #[test]
    fn test_format_cpf() {
        assert_eq!(format_cpf("12345678909"), "123.456.789-09");
    }

    #[test]
    fn test_format_cpf_entrada_invalida_sem_alteracao() {
        // Comprimento errado ou não-dígitos: devolve como veio
        assert_eq!(format_cpf("1234567890"), "1234567890");
        assert_eq!(format_cpf("123456789091"), "123456789091");
        assert_eq!(format_cpf("123.456.789-09"), "123.456.789-09");
        assert_eq!(format_cpf(""), "");
    }

    #[test]
    fn test_format_cnpj() {
        assert_eq!(format_cnpj("12345678000195"), "12.345.678/0001-95");
    }

    #[test]
    fn test_format_cnpj_entrada_invalida_sem_alteracao() {
        assert_eq!(format_cnpj("1234567800019"), "1234567800019");
        assert_eq!(format_cnpj("12.345.678/0001-95"), "12.345.678/0001-95");
    }

    #[test]
    fn test_status_color_conhecidos() {
        assert_eq!(status_color("consulta_inicial"), "bg-blue-100 text-blue-800");
        assert_eq!(status_color("documentacao_pendente"), "bg-yellow-100 text-yellow-800");
        assert_eq!(status_color("analise_caso"), "bg-purple-100 text-purple-800");
        assert_eq!(status_color("protocolo_inss"), "bg-orange-100 text-orange-800");
        assert_eq!(status_color("aguardando_resposta"), "bg-cyan-100 text-cyan-800");
        assert_eq!(status_color("recurso_contestacao"), "bg-pink-100 text-pink-800");
        assert_eq!(status_color("deferido"), "bg-green-100 text-green-800");
        assert_eq!(status_color("indeferido"), "bg-red-100 text-red-800");
    }

    #[test]
    fn test_status_color_desconhecido_usa_padrao() {
        assert_eq!(status_color("arquivado"), "bg-gray-100 text-gray-800");
        assert_eq!(status_color(""), "bg-gray-100 text-gray-800");
    }

    #[test]
    fn test_category_color() {
        assert_eq!(category_color("aposentadoria"), "bg-indigo-100 text-indigo-800");
        assert_eq!(category_color("bpc_loas"), "bg-lime-100 text-lime-800");
        assert_eq!(category_color("outra_coisa"), "bg-gray-100 text-gray-800");
    }
}
