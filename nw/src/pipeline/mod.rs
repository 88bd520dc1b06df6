mod align;
pub use align::align;

mod random;
pub use random::random;

mod output_step;
pub use output_step::OutputStep;
