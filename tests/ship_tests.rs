use salvo::{BoardError, Orientation, Ship};

#[test]
fn test_new_ship_has_full_health() -> Result<(), BoardError> {
    let ship = Ship::new(3, Orientation::Horizontal)?;
    assert_eq!(ship.size(), 3);
    assert_eq!(ship.health(), 3);
    assert!(ship.is_alive());
    assert_eq!(ship.origin(), None);
    Ok(())
}

#[test]
fn test_invalid_sizes_rejected() {
    assert_eq!(
        Ship::new(0, Orientation::Vertical).unwrap_err(),
        BoardError::InvalidShipSize(0)
    );
    assert_eq!(
        Ship::new(5, Orientation::Horizontal).unwrap_err(),
        BoardError::InvalidShipSize(5)
    );
}

#[test]
fn test_hit_until_sunk_and_clamp() -> Result<(), BoardError> {
    let mut ship = Ship::new(2, Orientation::Vertical)?;
    ship.hit();
    assert!(ship.is_alive());
    assert_eq!(ship.health(), 1);
    ship.hit();
    assert!(!ship.is_alive());
    // health never goes negative
    ship.hit();
    assert_eq!(ship.health(), 0);
    assert!(!ship.is_alive());
    Ok(())
}

#[test]
fn test_segments_follow_orientation() -> Result<(), BoardError> {
    let vertical = Ship::new(4, Orientation::Vertical)?;
    let cells: Vec<_> = vertical.segments(2, 3).collect();
    assert_eq!(cells, vec![(2, 3), (2, 4), (2, 5), (2, 6)]);

    let horizontal = Ship::new(2, Orientation::Horizontal)?;
    let cells: Vec<_> = horizontal.segments(7, 0).collect();
    assert_eq!(cells, vec![(7, 0), (8, 0)]);
    Ok(())
}
