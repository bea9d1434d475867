mod push;

pub use push::push;
