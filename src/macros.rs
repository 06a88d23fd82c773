// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! pct {
    // Share of `part` in `whole` as a percentage, 0.0 when `whole` is zero.
    ($part:expr, $whole:expr) => {{
        let whole = $whole as f64;
        if whole == 0.0 { 0.0 } else { ($part as f64) / whole * 100.0 }
    }};
}
