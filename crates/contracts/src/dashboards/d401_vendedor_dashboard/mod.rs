pub mod dto;

pub use dto::{DashboardEstatisticas, VendedorDashboardResponse};
