pub mod aggregate;

pub use aggregate::{VendedorDto, VendedorId, VendedorPublico};
