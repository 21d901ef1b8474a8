pub mod dashboard;

pub use dashboard::RelatorioVendasDashboard;
