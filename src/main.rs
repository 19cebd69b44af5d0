use std::env;
use std::process;

use sexpc::compile;

/// Compiled when the program is launched without a source argument.
const DEFAULT_SOURCE: &str = r#"(add 3 (sub 4 (len "foo")))"#;

fn main() {
  let args: Vec<String> = env::args().collect();
  let source = match args.as_slice() {
    [_] => DEFAULT_SOURCE,
    [_, source] => source.as_str(),
    _ => {
      let program = args.first().map(String::as_str).unwrap_or("sexpc");
      eprintln!("usage: {program} [source]");
      process::exit(1);
    }
  };

  match compile(source) {
    Ok(code) => println!("{code}"),
    Err(err) => {
      eprintln!("{err}");
      process::exit(1);
    }
  }
}
