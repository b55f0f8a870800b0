mod question;

pub use question::{MathQuestion, Operator, generate_question, operators};
