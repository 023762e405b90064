//! TFPP Headless Locomotion Harness
//!
//! Validates the locomotion preset and the numeric movement policies
//! without any engine, ECS, or rendering. Runs entirely in-process.
//!
//! Usage:
//!   cargo run -p tfpp-simtest
//!   cargo run -p tfpp-simtest -- --verbose

use rand::Rng;
use tfpp_logic::angles::wrap_degrees;
use tfpp_logic::config::{build_config, validate_preset, LocomotionPreset};
use tfpp_logic::direction::{moving_direction, quantize_direction};
use tfpp_logic::locomotion::LocomotionComponent;
use tfpp_logic::pace::{Pace, Stance};
use tfpp_logic::view::{process_pitch, process_yaw, ViewLimits};

// ── Locomotion preset (same JSON a host would ship) ─────────────────────
const PRESET_JSON: &str = include_str!("../../../data/locomotion_preset.json");

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== TFPP Locomotion Harness ===\n");

    let mut results = Vec::new();

    // 1. Preset validation and table build
    results.extend(validate_preset_file(verbose));

    // 2. Pace/stance transition sweep
    results.extend(validate_transitions(verbose));

    // 3. Angle-gate policy sweep
    results.extend(validate_angle_gate(verbose));

    // 4. View rotation sweep
    results.extend(validate_view_rotation(verbose));

    // 5. Direction quantizer sweep
    results.extend(validate_direction(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn load_preset(results: &mut Vec<TestResult>) -> Option<LocomotionPreset> {
    match serde_json::from_str::<LocomotionPreset>(PRESET_JSON) {
        Ok(preset) => Some(preset),
        Err(e) => {
            results.push(TestResult {
                name: "preset_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            None
        }
    }
}

// ── 1. Preset ───────────────────────────────────────────────────────────

fn validate_preset_file(_verbose: bool) -> Vec<TestResult> {
    println!("--- Locomotion Preset ---");
    let mut results = Vec::new();

    let Some(preset) = load_preset(&mut results) else {
        return results;
    };

    let errors = validate_preset(&preset);
    results.push(TestResult {
        name: "preset_valid".into(),
        passed: errors.is_empty(),
        detail: if errors.is_empty() {
            format!(
                "'{}': {} paces, {} stances",
                preset.name,
                preset.paces.len(),
                preset.stances.len()
            )
        } else {
            format!("{:?}", errors)
        },
    });

    let config = build_config(&preset);
    results.push(TestResult {
        name: "preset_tables".into(),
        passed: config.pace_max_speed.len() == preset.paces.len()
            && config.stance_multiplier.len() == preset.stances.len(),
        detail: format!(
            "{} speed entries, {} multipliers, {} angle restrictions",
            config.pace_max_speed.len(),
            config.stance_multiplier.len(),
            config.pace_angle_restriction.len()
        ),
    });

    // The default preset mirrors the intended tuning: walk/jog/sprint with
    // a forward-cone sprint restriction.
    let sprint_gated = config.pace_angle_restriction.contains_key(&Pace::SPRINT);
    results.push(TestResult {
        name: "preset_sprint_gated".into(),
        passed: sprint_gated,
        detail: "sprint tier carries an angle restriction".into(),
    });

    results
}

// ── 2. Transitions ──────────────────────────────────────────────────────

fn validate_transitions(_verbose: bool) -> Vec<TestResult> {
    println!("--- Pace/Stance Transitions ---");
    let mut results = Vec::new();

    let Some(preset) = load_preset(&mut results) else {
        return results;
    };
    let config = build_config(&preset);
    let default_pace = config.default_pace;
    let mut component = LocomotionComponent::new(config);

    component.initialize();
    results.push(TestResult {
        name: "transitions_initial_state".into(),
        passed: component.current_pace() == default_pace && component.max_speed() == 200.0,
        detail: format!(
            "pace {:?}, max speed {}",
            component.current_pace(),
            component.max_speed()
        ),
    });

    component.set_pace(Pace::SPRINT);
    let consistent =
        component.max_speed() == 650.0 && (component.max_speed_crouched() - 325.0).abs() < 1e-3;
    results.push(TestResult {
        name: "transitions_effective_speeds".into(),
        passed: component.current_pace() == Pace::SPRINT && consistent,
        detail: format!(
            "sprint: max {} / crouched {}",
            component.max_speed(),
            component.max_speed_crouched()
        ),
    });

    let before = component.current_pace();
    component.set_pace(Pace(200));
    results.push(TestResult {
        name: "transitions_unknown_pace_rejected".into(),
        passed: component.current_pace() == before && component.max_speed() == 650.0,
        detail: "unregistered pace left state untouched".into(),
    });

    component.set_stance(Stance::CROUCHING);
    results.push(TestResult {
        name: "transitions_stance_change".into(),
        passed: component.current_stance() == Stance::CROUCHING,
        detail: format!("stance {:?}", component.current_stance()),
    });

    results
}

// ── 3. Angle gate ───────────────────────────────────────────────────────

fn validate_angle_gate(verbose: bool) -> Vec<TestResult> {
    println!("--- Angle Gate ---");
    let mut results = Vec::new();

    let Some(preset) = load_preset(&mut results) else {
        return results;
    };
    let component = LocomotionComponent::new(build_config(&preset));

    // Sweep the facing-vs-velocity angle in one-degree steps; sprint is
    // restricted to [0, 75] in the default preset.
    let facing = (1.0, 0.0);
    let mut boundary_ok = true;
    let mut gate_detail = String::new();
    for angle_deg in 0..=180 {
        let rad = (angle_deg as f32).to_radians();
        let velocity = (rad.cos(), rad.sin());
        let allowed = component.is_pace_allowed_on_direction_angle(Pace::SPRINT, facing, velocity);
        // Stay clear of the boundary itself: float acos wobbles there.
        let expected = if angle_deg <= 74 {
            true
        } else if angle_deg >= 76 {
            false
        } else {
            continue;
        };
        if allowed != expected {
            boundary_ok = false;
            gate_detail = format!("mismatch at {} degrees", angle_deg);
        }
    }
    results.push(TestResult {
        name: "gate_sweep".into(),
        passed: boundary_ok,
        detail: if boundary_ok {
            "sprint allowed through 74°, denied from 76°".into()
        } else {
            gate_detail
        },
    });

    // Unrestricted paces never consult the sweep angle.
    let mut rng = rand::thread_rng();
    let mut unrestricted_ok = true;
    for _ in 0..256 {
        let velocity = (rng.gen_range(-1.0..1.0f32), rng.gen_range(-1.0..1.0f32));
        if !component.is_pace_allowed_on_direction_angle(Pace::WALK, facing, velocity) {
            unrestricted_ok = false;
        }
    }
    results.push(TestResult {
        name: "gate_unrestricted".into(),
        passed: unrestricted_ok,
        detail: "walk tier admissible at every sampled angle".into(),
    });

    // Degenerate kinematics: the check is skipped rather than faulting.
    let degenerate =
        component.is_pace_allowed_on_direction_angle(Pace::SPRINT, facing, (0.0, 0.0));
    results.push(TestResult {
        name: "gate_degenerate_velocity".into(),
        passed: degenerate,
        detail: "stationary character may sprint".into(),
    });

    if verbose {
        println!("  swept 181 angles against the sprint restriction");
    }

    results
}

// ── 4. View rotation ────────────────────────────────────────────────────

fn validate_view_rotation(_verbose: bool) -> Vec<TestResult> {
    println!("--- View Rotation ---");
    let mut results = Vec::new();
    let limits = ViewLimits::default();
    let mut rng = rand::thread_rng();

    let clamped = process_pitch(120.0, &limits) == 90.0 && process_pitch(-95.0, &limits) == -90.0;
    results.push(TestResult {
        name: "view_pitch_clamp".into(),
        passed: clamped,
        detail: "120° → 90°, -95° → -90°".into(),
    });

    let seam = (process_yaw(170.0, -170.0) - (-20.0)).abs() < 1e-3;
    results.push(TestResult {
        name: "view_yaw_seam".into(),
        passed: seam,
        detail: format!("yaw(170, -170) = {}", process_yaw(170.0, -170.0)),
    });

    // Random sweep: wrapped yaw always lands in (-180, 180] and a full
    // turn on either input changes nothing.
    let mut range_ok = true;
    let mut periodic_ok = true;
    for _ in 0..1024 {
        let look = rng.gen_range(-720.0..720.0f32);
        let body = rng.gen_range(-720.0..720.0f32);
        let yaw = process_yaw(look, body);
        if !(-180.0 < yaw && yaw <= 180.0) {
            range_ok = false;
        }
        if (process_yaw(look + 360.0, body) - yaw).abs() > 1e-2 {
            periodic_ok = false;
        }
    }
    results.push(TestResult {
        name: "view_yaw_range".into(),
        passed: range_ok,
        detail: "wrapped yaw stays in (-180, 180]".into(),
    });
    results.push(TestResult {
        name: "view_yaw_periodic".into(),
        passed: periodic_ok,
        detail: "full turns do not change the wrapped yaw".into(),
    });

    let wrap_ok = wrap_degrees(520.0) == 160.0 && wrap_degrees(-180.0) == 180.0;
    results.push(TestResult {
        name: "view_wrap_anchor".into(),
        passed: wrap_ok,
        detail: "520° → 160°, -180° → 180°".into(),
    });

    results
}

// ── 5. Direction quantizer ──────────────────────────────────────────────

fn validate_direction(_verbose: bool) -> Vec<TestResult> {
    println!("--- Direction Quantizer ---");
    let mut results = Vec::new();
    let mut rng = rand::thread_rng();

    let grid = quantize_direction((0.09, 0.5)) == (0, 1)
        && quantize_direction((0.11, -0.5)) == (1, -1)
        && quantize_direction((0.0, 0.0)) == (0, 0);
    results.push(TestResult {
        name: "direction_dead_zone".into(),
        passed: grid,
        detail: "±0.1 dead zone snaps near-zero components".into(),
    });

    // Random sweep: every output axis lands on the 3x3 grid, and rotating
    // both the body and the velocity together leaves the result alone.
    let mut grid_ok = true;
    let mut frame_ok = true;
    for _ in 0..1024 {
        let velocity = (rng.gen_range(-10.0..10.0f32), rng.gen_range(-10.0..10.0f32));
        let yaw = rng.gen_range(-360.0..360.0f32);
        let (fwd, right) = moving_direction(velocity, yaw);
        if !(-1..=1).contains(&fwd) || !(-1..=1).contains(&right) {
            grid_ok = false;
        }

        // Rotate the velocity by the body yaw: in the body frame this is
        // the same motion as yaw 0.
        let rad = yaw.to_radians();
        let rotated = (
            velocity.0 * rad.cos() - velocity.1 * rad.sin(),
            velocity.0 * rad.sin() + velocity.1 * rad.cos(),
        );
        if moving_direction(rotated, yaw) != moving_direction(velocity, 0.0) {
            frame_ok = false;
        }
    }
    results.push(TestResult {
        name: "direction_grid".into(),
        passed: grid_ok,
        detail: "axes stay in {-1, 0, 1}".into(),
    });
    results.push(TestResult {
        name: "direction_frame_invariance".into(),
        passed: frame_ok,
        detail: "co-rotating body and velocity preserves the reading".into(),
    });

    results
}
