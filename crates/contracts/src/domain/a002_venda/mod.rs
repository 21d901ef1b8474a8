pub mod aggregate;

pub use aggregate::{VendaDto, VendaId};
