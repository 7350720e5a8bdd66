//! Client-side state for the contact page.
//!
//! DESIGN
//! ======
//! State is split by concern (`form`, `theme`, `submission`) so each piece
//! can be tested on its own; `contact` ties them to storage and the document.

pub mod contact;
pub mod form;
pub mod submission;
pub mod theme;
