use std::process::exit;

/// The problem was proved.
pub fn proved() -> ! {
    exit(0)
}

/// No proof: unprovable, or the step limit was hit.
pub fn not_proved() -> ! {
    exit(1)
}

/// The problem could not be read or parsed.
pub fn bad_input() -> ! {
    exit(2)
}
