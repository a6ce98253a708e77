pub fn os_error(name: &str) {
    println!("% SZS status OSError for {}", name);
}

pub fn input_error(name: &str) {
    println!("% SZS status InputError for {}", name);
}

pub fn gave_up(name: &str) {
    println!("% SZS status GaveUp for {}", name);
}

pub fn theorem(name: &str) {
    println!("% SZS status Theorem for {}", name);
}

pub fn counter_satisfiable(name: &str) {
    println!("% SZS status CounterSatisfiable for {}", name);
}

pub fn begin_proof(name: &str) {
    println!("% SZS output begin Proof for {}", name);
}

pub fn end_proof(name: &str) {
    println!("% SZS output end Proof for {}", name);
}

pub fn begin_model(name: &str) {
    println!("% SZS output begin FiniteModel for {}", name);
}

pub fn end_model(name: &str) {
    println!("% SZS output end FiniteModel for {}", name);
}
