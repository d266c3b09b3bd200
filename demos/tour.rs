use clap::Parser;
use optional::{IN_PLACE, NO_VALUE, NoValue, Optional, make_optional};

#[derive(Debug, Parser)]
pub struct Cli {
    /// Fallback handed to `value_or` on the empty container
    #[clap(long, default_value_t = 42)]
    pub fallback: i32,
    /// Also show the failing checked access
    #[clap(long)]
    pub bad_access: bool,
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    let a = Optional::some(1_i32);
    let b: Optional<String> = Optional::in_place(IN_PLACE, || "hello".to_owned());
    let c: Optional<NoValue> = Optional::new();
    let d = make_optional(0.1_f64);
    log::info!("a = {a:?}, b = {b:?}, c = {c:?}, d = {d:?}");
    println!("a == NO_VALUE: {}", a == NO_VALUE);
    println!("c == NO_VALUE: {}", c == NO_VALUE);
    println!("d > 0.0: {}", d > 0.0_f64);

    let empty: Optional<i32> = Optional::new();
    println!(
        "empty.has_value() = {}, empty.value_or({}) = {}",
        empty.has_value(),
        args.fallback,
        empty.value_or(args.fallback),
    );

    let mut text: Optional<String> = Optional::new();
    text.emplace("hello".to_owned());
    println!("text = {:?}", text.value());

    let mut one = Optional::some(1_i32);
    let mut two = Optional::some(2_i32);
    one.swap(&mut two);
    println!("after swap: one = {one:?}, two = {two:?}");

    let five = Optional::some(5_i32);
    println!(
        "five == NO_VALUE: {}, NO_VALUE < five: {}",
        five == NO_VALUE,
        NO_VALUE < five,
    );

    if args.bad_access {
        match empty.value() {
            Ok(value) => println!("unexpected value {value}"),
            Err(e) => println!("empty.value(): {e}"),
        }
    }
}
