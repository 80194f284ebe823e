use etude::calc::Calculator;
use etude::io::ConsoleNotify;
use etude::ladder::Ladder;
use etude::list::Node;
use etude::recurse::factorial;
use etude::recurse::fibonacci;
use etude::seq::filter_range;
use etude::seq::unique;
use etude::timer::SimClock;
use etude::timer::Timers;

fn main() {
    let mut calc = Calculator::new();
    calc.register("**", |a, b| a.powf(b));
    println!("3 + 7 = {:?}", calc.evaluate("3 + 7"));
    println!("2 ** 3 = {:?}", calc.evaluate("2 ** 3"));
    println!("3 & 7 = {:?}", calc.evaluate("3 & 7"));

    let values = [5, 3, 8, 1, 3, 5];
    println!("unique: {:?}", unique(&values));
    println!("in [1, 4]: {:?}", filter_range(&values, 1, 4));

    println!("5! = {}", factorial(5));
    println!("fib(6) = {}", fibonacci(6));

    let head = Node::chain([1, 2, 3, 4]).unwrap();
    let mut out = ConsoleNotify;
    head.emit(&mut out);

    let mut ladder = Ladder::new();
    ladder.up().down().up().show_step(&mut out);

    let mut timers = Timers::new(SimClock::new());
    let done = timers.delay(3);
    done.then(|_| println!("runs after 3 units"));
    timers.clock_mut().advance_by(3);
    timers.tick();
}
