use diatom::{
    constants::{ Config, Molecule },
    energy::{ Energies, Orbit },
    motion::Motion,
    params::{ Change, Params, Store },
    spectrum::Spectrum,
};

const E_MAX: f64 = 8.0; // print levels below this energy
const FRAMES: usize = 60; // animation frames between updates

fn report(params: &Params, spec: &Spectrum, molecule: &Molecule) {
    let en = Energies::of(params, molecule);
    let orbit = Orbit::of(params, molecule);
    println!(
        "l = {:2}, v = {:2}, k = {:.2}, n = {}",
        params.l(), params.v(), params.k(), params.n(),
    );
    println!(
        "  rigid rotor + harmonic: rot = {:.6}, vib = {:.6}, elec = {:.1}, total = {:.6}",
        en.rot, en.vib, en.elec, en.total,
    );
    println!("  classical amplitude = {:.6}, p_max = {:.6}", orbit.amplitude, orbit.p_max);
    if !spec.convergence().is_converged() {
        println!(
            "  warning: {} eigenvalue(s) hit the sweep cap",
            spec.convergence().nonconverged.len(),
        );
    }
    for (v, pair) in spec.below(E_MAX).enumerate() {
        let marker = if v as u32 == params.v() { "*" } else { " " };
        println!("  {marker} E[{v:2}] = {:.6}", pair.e);
    }
}

fn main() -> anyhow::Result<()> {
    let molecule = Molecule::carbon_monoxide();
    let config = Config::default();
    config.validate()?;

    let mut store = Store::new(Params::default());
    let rx = store.channel();

    let mut spec = store.get().spectrum(&molecule, &config)?;
    report(&store.get(), &spec, &molecule);

    let changes = [
        Change::L(1),
        Change::L(5),
        Change::V(2),
        Change::V(2),
        Change::K(2.5),
        Change::N(1),
        Change::N(2),
        Change::L(20),
    ];
    let mut motion = Motion::default();
    for change in changes {
        if !store.set(change)? { println!("{change:?}: no change"); }
        for (change, params) in rx.try_iter() {
            if change.affects_spectrum() {
                spec = params.spectrum(&molecule, &config)?;
            }
            println!("{change:?}:");
            report(&params, &spec, &molecule);
            motion = motion.advance(&params, config.time_step, FRAMES);
            println!(
                "  after {FRAMES} frames: angle = {:.4}, phase = {:.4}, r = {:.4}",
                motion.rotation_angle, motion.vibration_phase, motion.r_current,
            );
        }
    }
    Ok(())
}
