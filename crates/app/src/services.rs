//! Application services — the use-cases of the toggling core.

pub mod switch_toggler;
