pub mod dto;

pub use dto::{RelatorioResumo, RelatorioVendasResponse};
