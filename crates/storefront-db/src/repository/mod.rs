//! Repository modules — parameterized SQL, one module per resource.

pub mod products;
