use fanxi_core::{LineupSession, Member, MoveEvent, Slot, TacticsParameter};

fn print_board(session: &LineupSession) {
    for slot in Slot::ALL {
        let occupant = session
            .state()
            .occupant(slot)
            .map(|m| format!("{} (#{})", m.name, m.number))
            .unwrap_or_else(|| "-".to_string());
        println!("  {:>4}: {}", slot.id(), occupant);
    }
    let bench: Vec<&str> = session
        .state()
        .roster()
        .values()
        .map(|m| m.name.as_str())
        .collect();
    println!("  bench: {}", bench.join(", "));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("⚽ FanXI lineup engine walk-through");

    let squad = vec![
        Member::new("messi", "L. Messi", 10),
        Member::new("ronaldo", "C. Ronaldo", 7),
        Member::new("mbappe", "K. Mbappe", 10),
        Member::new("haaland", "E. Haaland", 9),
        Member::new("van_dijk", "V. van Dijk", 4),
        Member::new("pedri", "Pedri", 8),
        Member::new("araujo", "R. Araujo", 4),
        Member::new("kounde", "J. Kounde", 23),
        Member::new("ter_stegen", "Ter Stegen", 1),
    ];
    let mut session = LineupSession::new(squad);

    println!("\n1) Place the keeper and two forwards");
    session.dispatch(MoveEvent::PlaceFromRoster {
        member: "ter_stegen".into(),
        target: Slot::GK,
    })?;
    session.dispatch(MoveEvent::PlaceFromRoster {
        member: "haaland".into(),
        target: Slot::ST,
    })?;
    session.dispatch(MoveEvent::PlaceFromRoster {
        member: "messi".into(),
        target: Slot::RW,
    })?;
    print_board(&session);

    println!("\n2) Displace Haaland with Ronaldo at ST");
    session.dispatch(MoveEvent::PlaceFromRoster {
        member: "ronaldo".into(),
        target: Slot::ST,
    })?;
    print_board(&session);

    println!("\n3) Swap Messi and Ronaldo between RW and ST");
    session.dispatch(MoveEvent::MoveWithinSlots {
        member: "messi".into(),
        target: Slot::ST,
    })?;
    print_board(&session);

    println!("\n4) Tune tactics and lock a snapshot");
    session.tactics_mut().set(TacticsParameter::PressingIntensity, 80);
    session.tactics_mut().set(TacticsParameter::Mentality, 150); // clamps to 100
    let snapshot = session.snapshot();
    println!(
        "  locked at {} with tactics {:?}",
        snapshot.created_at, snapshot.tactics
    );

    println!("\n5) Reset the board, then restore the snapshot");
    session.reset();
    print_board(&session);
    session.restore(&snapshot)?;
    print_board(&session);

    session.state().check_injectivity()?;
    println!("\n✅ Injectivity holds after every step");
    Ok(())
}
