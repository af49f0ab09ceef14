//! GradeDesk Validation
//!
//! Pure validation functions for the teacher registration form.
//! Used by the browser bindings on every keystroke and by the server-side
//! form types when a registration is accepted.
//!
//! Every function here is total: any string, including an empty or
//! half-typed one, produces a boolean or a fixed-shape struct of booleans.
//! Nothing is cached between calls.
//!
//! ```
//! use gradedesk_validation::{is_form_valid, validate_phone};
//!
//! assert!(validate_phone("+7 (900) 123-45-67"));
//! assert!(is_form_valid(
//!     "Иванов Алексей",
//!     "+7 (900) 123-45-67",
//!     "teacher@school.ru",
//!     "math_teacher",
//!     "Kx8#mq2!Lp",
//!     "Kx8#mq2!Lp",
//! ));
//! ```

pub mod feedback;
pub mod field;
pub mod form;
pub mod password;
pub mod phone;
pub mod validators;

// Re-export all validators
pub use feedback::*;
pub use field::*;
pub use form::*;
pub use password::*;
pub use phone::*;
pub use validators::*;
