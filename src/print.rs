/// 终端中按ANSI颜色输出一行，输出被重定向时只输出原文。
#[doc(hidden)]
#[macro_export]
macro_rules! __colored_line {
    ($stream:ident, $print:ident, $println:ident, $color:literal, $($arg:tt)*) => {
        if std::io::IsTerminal::is_terminal(&std::io::$stream()) {
            $print!(concat!("\x1b[", $color, "m"));
            $print!($($arg)*);
            $println!("\x1b[0m");
        } else {
            $println!($($arg)*);
        }
    };
}

/// 错误信息，红色粗体。
#[macro_export]
macro_rules! println_err {
    () => {};
    ($($arg:tt)*) => {
        $crate::__colored_line!(stderr, eprint, eprintln, "1;31", $($arg)*)
    };
}

/// 流水线信息，蓝色粗体。
#[macro_export]
macro_rules! println_info {
    () => {};
    ($($arg:tt)*) => {
        $crate::__colored_line!(stdout, print, println, "1;34", $($arg)*)
    };
}

/// 提示信息输出到标准错误，避免混入流水线结果。
#[macro_export]
macro_rules! println_notice {
    () => {};
    ($($arg:tt)*) => {
        $crate::__colored_line!(stderr, eprint, eprintln, "35", $($arg)*)
    };
}
