use circle_chase::commands;
use circle_chase::config::{Settings, CONFIG_FILE};
use circle_chase::plane::Plane;
use eframe::egui::pos2;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

// Headless run of the movement stepping: spawn the circle, aim it at a fixed
// point, and record the trajectory frame by frame.
fn main() -> io::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .ok();

    let settings = Settings::load_or_default(Path::new(CONFIG_FILE));

    let mut plane = Plane::new();
    commands::start_program(&mut plane);
    plane.set_target_position(pos2(400.0, 300.0));

    let mut file = File::create("plane_trace.csv")?;
    writeln!(file, "time,x,y,target_x,target_y")?;

    let tstop = 5.0;
    let dt = 1.0 / 60.0;
    let mut t = 0.0f32;
    while t <= tstop {
        let p = plane.position();
        let tp = plane.target_position();
        writeln!(
            file,
            "{:.4},{:.3},{:.3},{:.3},{:.3}",
            t, p.x, p.y, tp.x, tp.y
        )?;
        if !plane.moving() {
            break;
        }
        plane.step(settings.step_speed, dt);
        t += dt;
    }

    println!("Wrote movement trace to plane_trace.csv");
    Ok(())
}
