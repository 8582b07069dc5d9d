use diatom::{
    grid::Grid,
    potential::{ PotentialModel, Term },
    solve::System,
    utils::node_count,
};

const HBAR: f64 = 1.0;
const MASS: f64 = 200.0;
const K: f64 = 3.2;
const X0: f64 = 1.13;
const NPOINTS: usize = 200;
const LEVELS: usize = 6;

fn main() -> anyhow::Result<()> {
    let hw = HBAR * (K / MASS).sqrt();
    let grid = Grid::new(NPOINTS, 0.13, 2.13)?;
    let model = PotentialModel::new().with(Term::Harmonic { k: K, x0: X0 });
    let sys = System::new(grid, &model);
    let spec = sys.solve(HBAR, MASS)?;
    println!("ħω = {hw:.8}, dx = {:.6}", sys.get_dx());
    println!(
        "converged: {} ({} sweeps)",
        spec.convergence().is_converged(),
        spec.convergence().sweeps,
    );
    println!("{:>3} {:>14} {:>14} {:>12} {:>6}", "v", "numeric", "exact", "error", "nodes");
    for (v, pair) in spec.into_pairs().into_iter().take(LEVELS).enumerate() {
        let exact = (v as f64 + 0.5) * hw;
        println!(
            "{v:3} {:14.8} {exact:14.8} {:12.3e} {:6}",
            pair.e, pair.e - exact, node_count(&pair.wf),
        );
    }
    Ok(())
}
