pub mod add;
pub mod div;
pub mod mul;
pub mod scale;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use scale::{add_scaled_op, mul_scalar_op};
pub use sub::sub_op;
