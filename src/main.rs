#![allow(nonstandard_style)]

use expreval::*;

use std::io::Write;

fn read_variable(name: &str) -> Result<f64> {
    print!("enter a value for '{}': ", name);
    std::io::stdout().flush().unwrap();

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .map_err(|_| CalcError::variable_resolution(name.into()))?;
    line.trim()
        .parse()
        .map_err(|_| CalcError::variable_resolution(name.into()))
}

fn main() {
    print!("> ");
    std::io::stdout().flush().unwrap();

    let mut evaluator = Evaluator::new(read_variable);

    for line in std::io::stdin().lines() {
        let line = line.unwrap();

        if line.trim().is_empty() {
            break;
        }

        match evaluator.evaluate(&line) {
            Ok(value) => println!("{}", value),
            Err(e) => println!("Error, {}", e),
        }

        print!("> ");
        std::io::stdout().flush().unwrap();
    }
}
