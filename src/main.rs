use faux_hollows::simulation::{Layout, Simulation};
use faux_hollows::Solver;
use std::process;

// Plays random games with both strategies and reports how many cells they need to reveal
fn main() {
    let games = match std::env::args().nth(1).map(|arg| arg.parse::<usize>()) {
        None => 1000,
        Some(Ok(games)) if games > 0 => games,
        _ => {
            eprintln!("usage: faux_hollows [GAMES]");
            process::exit(2);
        }
    };

    let mut rng = rand::thread_rng();
    for &find_swords_first in &[false, true] {
        let solver = Solver::default().with_find_swords_first(find_swords_first);
        let mut total_reveals = 0;
        for _ in 0..games {
            let layout = Layout::random(solver.patterns(), &mut rng);
            match Simulation::new(layout).and_then(|mut sim| sim.play(&solver)) {
                Ok(reveals) => total_reveals += reveals,
                Err(err) => {
                    eprintln!("simulation failed: {}", err);
                    process::exit(1);
                }
            }
        }
        println!(
            "find swords first: {:<5}  average reveals: {:.2}",
            find_swords_first,
            total_reveals as f64 / games as f64
        );
    }
}
