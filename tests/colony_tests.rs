use std::path::Path;

use colony::display::NullDisplay;
use colony::seed;
use colony::world::World;

#[test]
fn test_colonies() -> anyhow::Result<()> {
    let colony_dir = std::fs::read_dir("tests/colonies")?;
    let mut tested = 0;
    let mut failed = Vec::new();

    for entry in colony_dir {
        let path = entry?.path();

        match seed::load_colony(&path) {
            Ok(grid) => {
                assert!(grid.population() > 0, "{path:?} is empty");
                tested += 1;
            }
            Err(e) => failed.push((path.clone(), e)),
        }
    }

    if !failed.is_empty() {
        for (path, err) in &failed {
            eprintln!("Failed to parse {:?}: {:#}", path, err);
        }

        panic!(
            "{}/{} colonies failed to parse",
            failed.len(),
            tested + failed.len()
        );
    }

    println!("Successfully parsed {} colonies", tested);

    Ok(())
}

#[test]
fn test_colony_name_without_extension() -> anyhow::Result<()> {
    let grid = seed::load_colony(Path::new("tests/colonies/glider"))?;

    insta::assert_snapshot!(grid.to_string(), @r"
    -o---
    --o--
    ooo--
    -----
    -----
    ");

    Ok(())
}

#[test]
fn test_missing_colony() {
    let err = seed::load_colony(Path::new("tests/colonies/nothing-here")).unwrap_err();

    assert_eq!(
        err.to_string().split(':').next(),
        Some("Unable to open the file named \"tests/colonies/nothing-here\"")
    );
}

/// Oscillators of period 2 come back to their starting shape, with every cell that never died
/// two generations older.
#[test]
fn test_period_two_oscillators() -> anyhow::Result<()> {
    for name in ["blinker", "beacon", "toad"] {
        let grid = seed::load_colony(&Path::new("tests/colonies").join(name))?;
        let mut world = World::new(grid.clone());

        world.advance(&mut NullDisplay)?;
        assert_ne!(world.current().to_string(), grid.to_string(), "{name}");

        world.advance(&mut NullDisplay)?;
        assert_eq!(world.current().to_string(), grid.to_string(), "{name}");
        assert_eq!(world.current().num_rows(), grid.num_rows());
    }

    Ok(())
}

#[test]
fn test_block_ages() -> anyhow::Result<()> {
    let mut world = World::new(seed::load_colony(Path::new("tests/colonies/block.txt"))?);

    for _ in 0..20 {
        world.advance(&mut NullDisplay)?;
    }

    assert_eq!(world.generation(), 20);
    assert_eq!(world.current()[(1, 1)], 21);
    assert_eq!(world.current().population(), 4);

    Ok(())
}

#[test]
fn test_beacon_ages() -> anyhow::Result<()> {
    let mut world = World::new(seed::load_colony(Path::new("tests/colonies/beacon.txt"))?);

    world.advance(&mut NullDisplay)?;
    world.advance(&mut NullDisplay)?;

    // The outer corners never die, the inner ones are reborn every other generation
    let ages: Vec<_> = world.current().cells().filter(|&(_, _, age)| age > 0).collect();
    assert_eq!(
        ages,
        vec![
            (1, 1, 3),
            (1, 2, 3),
            (2, 1, 3),
            (2, 2, 1),
            (3, 3, 1),
            (3, 4, 3),
            (4, 3, 3),
            (4, 4, 3),
        ]
    );

    Ok(())
}
