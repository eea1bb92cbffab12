pub mod html;
pub mod ident;
