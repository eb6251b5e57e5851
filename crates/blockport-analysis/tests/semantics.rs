use blockport_analysis::semantics::guess_material;
use blockport_analysis::{analyze_type, Behavior, BlockKind, MaterialGuess};

#[test]
fn kinds_follow_rule_order() {
    let t = analyze_type("oak_stairs");
    assert_eq!((t.kind, t.behavior), (BlockKind::Stairs, Behavior::Navigation));
    let t = analyze_type("stone_slab");
    assert_eq!((t.kind, t.behavior), (BlockKind::Slab, Behavior::Navigation));
    let t = analyze_type("iron_door");
    assert_eq!((t.kind, t.behavior), (BlockKind::Door, Behavior::Interactive));
    let t = analyze_type("glass_pane");
    assert_eq!((t.kind, t.behavior), (BlockKind::Connector, Behavior::Barrier));
    let t = analyze_type("cobblestone_wall");
    assert_eq!(t.kind, BlockKind::Connector);
    let t = analyze_type("bookshelf");
    assert_eq!((t.kind, t.behavior), (BlockKind::Generic, Behavior::Structural));
}

#[test]
fn mechanical_overrides_behavior_only() {
    let t = analyze_type("stone_button");
    assert_eq!((t.kind, t.behavior), (BlockKind::Generic, Behavior::Mechanical));
    let t = analyze_type("redstone_wire");
    assert_eq!(t.behavior, Behavior::Mechanical);
    // Kind keeps its shape subtype
    let t = analyze_type("oak_pressure_plate");
    assert_eq!(t.behavior, Behavior::Mechanical);
    assert_eq!(t.material, MaterialGuess::Wood);
}

#[test]
fn materials_first_match_wins() {
    assert_eq!(guess_material("oak_planks"), MaterialGuess::Wood);
    assert_eq!(guess_material("deepslate_bricks"), MaterialGuess::Stone);
    assert_eq!(guess_material("tinted_glass"), MaterialGuess::Glass);
    assert_eq!(guess_material("coarse_dirt"), MaterialGuess::Earth);
    assert_eq!(guess_material("iron_bars"), MaterialGuess::Metal);
    assert_eq!(guess_material("white_wool"), MaterialGuess::Other);
    // Earlier rules are not overridden by later ones
    assert_eq!(guess_material("sandstone"), MaterialGuess::Stone);
    assert_eq!(guess_material("oak_glass_thing"), MaterialGuess::Wood);
}
