//! Photology Console Walkthrough
//!
//! Runs every layer of the simulation end to end and prints the
//! intermediate physical quantities the GUI would otherwise render.

use photology::dsl;
use photology::engine::{binary_gate_names, unary_gate_names, EvalMode, Evaluator};
use photology::grating::design_grating;
use photology::polarization::encode_trit;
use photology::ternary::{self, Trit};
use photology::timing::{
    estimate_electronic_delay, estimate_photonic_delay, estimate_ter, ElectronicTechParams,
    PhotonicTechParams,
};
use photology::TripleChannelDetector;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn show_truth_tables() {
    println!("\n{}", "=".repeat(60));
    println!("TERNARY ALGEBRA");
    println!("{}", "=".repeat(60));

    println!("  TNOT:");
    for (x, y) in ternary::truth_table_unary(ternary::tnot) {
        println!("    TNOT({x}) = {y}");
    }

    println!("  TNAND:");
    for (a, b, y) in ternary::truth_table_binary(ternary::tnand) {
        println!("    TNAND({a}, {b}) = {y}");
    }
}

fn show_encoding() {
    println!("\n{}", "=".repeat(60));
    println!("POLARIZATION ENCODING");
    println!("{}", "=".repeat(60));

    for t in Trit::ALL {
        let state = encode_trit(t);
        let [x, y, z] = state.poincare();
        println!(
            "  {t}: angle = {:5.1} deg, Jones = ({:+.3}, {:+.3}), Poincare = ({:+.3}, {:+.3}, {:+.3})",
            state.angle_deg, state.jones[0].re, state.jones[1].re, x, y, z
        );
    }
}

fn show_grating_design() {
    println!("\n{}", "=".repeat(60));
    println!("SUBWAVELENGTH GRATING DESIGN");
    println!("{}", "=".repeat(60));

    for (material, n_clad) in [("Si", 1.44), ("SiN", 1.44)] {
        match design_grating(1550.0, material, n_clad) {
            Ok(design) => println!(
                "  {material}: period = {:.1} nm, slit = {:.1} nm, f = {:.2}, \
                 n_TE = {:.3}, n_TM = {:.3}, contrast = {:.3}",
                design.period_nm,
                design.slit_width_nm,
                design.duty_cycle,
                design.n_eff_te,
                design.n_eff_tm,
                design.contrast
            ),
            Err(e) => println!("  {material}: {e}"),
        }
    }
}

fn show_detection() {
    println!("\n{}", "=".repeat(60));
    println!("TRIPLE-CHANNEL DETECTION");
    println!("{}", "=".repeat(60));

    let detector = TripleChannelDetector::ideal();
    for t in Trit::ALL {
        let reading = detector.detect_from_trit(t).expect("canonical angle");
        println!(
            "  input {t}: I(-1) = {:.3}, I(0) = {:.3}, I(+1) = {:.3} => decoded {}",
            reading.intensity(Trit::Minus),
            reading.intensity(Trit::Zero),
            reading.intensity(Trit::Plus),
            reading.decoded
        );
    }
}

fn show_evaluation() {
    println!("\n{}", "=".repeat(60));
    println!("GATE EVALUATION (ideal vs physical)");
    println!("{}", "=".repeat(60));

    println!(
        "  available gates: unary {:?}, binary {:?}",
        unary_gate_names(),
        binary_gate_names()
    );

    let evaluator = Evaluator::default();
    let operands = [Trit::Plus, Trit::Minus];
    for mode in [EvalMode::Ideal, EvalMode::Physical] {
        let result = evaluator
            .evaluate("TNAND", &operands, mode)
            .expect("known gate and arity");
        println!(
            "  TNAND(+1, -1) [{mode:?}]: ideal = {}, observed = {:?}",
            result.ideal,
            result.observed.map(|t| t.to_string())
        );
    }
}

fn show_dsl() {
    println!("\n{}", "=".repeat(60));
    println!("TRINEDSL HALF ADDER");
    println!("{}", "=".repeat(60));

    let src = "
        trit A, B, S, C;
        A = +1;
        B = +1;
        S = TSUM(A, B);
        C = TCARRY(A, B);
    ";
    match dsl::run(src) {
        Ok(env) => {
            let mut bindings: Vec<_> = env.bindings().collect();
            bindings.sort_by_key(|(name, _)| name.to_string());
            for (name, value) in bindings {
                println!("  {name} = {value}");
            }
        }
        Err(e) => println!("{e}"),
    }
}

fn show_timing() {
    println!("\n{}", "=".repeat(60));
    println!("DELAY AND ERROR-RATE COMPARISON");
    println!("{}", "=".repeat(60));

    let pho = PhotonicTechParams::default();
    let elec = ElectronicTechParams::default();
    for gate in ["TNOT", "TNAND", "TXOR", "FA"] {
        let p = estimate_photonic_delay(gate, &pho, None);
        let e = estimate_electronic_delay(gate, &elec);
        println!(
            "  {gate:>5}: photonic {:6.1} ps ({} stages), CMOS {:6.1} ps",
            p.total * 1e12,
            p.n_stages,
            e * 1e12
        );
    }

    let mut rng = StdRng::seed_from_u64(42);
    for noise in [1.0, 5.0, 20.0, 45.0] {
        let ter = estimate_ter(noise, 45.0, 10_000, &mut rng).expect("valid TER inputs");
        println!("  TER @ {noise:>4.1} deg angle noise: {ter:.4}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("\n{}", "#".repeat(60));
    println!("#  Photology: balanced ternary optical logic");
    println!("{}", "#".repeat(60));

    show_truth_tables();
    show_encoding();
    show_grating_design();
    show_detection();
    show_evaluation();
    show_dsl();
    show_timing();

    println!("\n{}", "=".repeat(60));
    println!("DONE");
    println!("{}", "=".repeat(60));
}
