pub mod error;
pub mod formatting;
pub mod logging;

pub use error::*;
pub use formatting::{category_color, format_cnpj, format_cpf, format_currency, format_date, status_color};
