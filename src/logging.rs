//! Colored console logging.
//!
//! `say!` is plain info, `yay!` a success, `hey!` a warning and `nay!` an error.

#[doc(hidden)]
pub use better_term::{flush_styles, Color};

#[macro_export]
macro_rules! say {
    ($($arg:tt)*) => {{
        println!("{}[i] {}", $crate::logging::Color::White, format!($($arg)*));
        $crate::logging::flush_styles();
    }};
}

#[macro_export]
macro_rules! yay {
    ($($arg:tt)*) => {{
        println!("{}[+] {}", $crate::logging::Color::Green, format!($($arg)*));
        $crate::logging::flush_styles();
    }};
}

#[macro_export]
macro_rules! hey {
    ($($arg:tt)*) => {{
        println!("{}[!] {}", $crate::logging::Color::Yellow, format!($($arg)*));
        $crate::logging::flush_styles();
    }};
}

#[macro_export]
macro_rules! nay {
    ($($arg:tt)*) => {{
        eprintln!("{}[x] {}", $crate::logging::Color::Red, format!($($arg)*));
        $crate::logging::flush_styles();
    }};
}
