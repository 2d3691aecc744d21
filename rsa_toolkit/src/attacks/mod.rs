pub mod fermat;
pub mod wiener;

pub use fermat::FermatAttack;
pub use wiener::{WienerAttack, WienerOutcome, convergent_bound};
