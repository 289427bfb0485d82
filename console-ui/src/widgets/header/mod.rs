mod component;

pub use component::Header;
