use blockport_analysis::{
    analyze_all, AnalysisContext, BlockKind, Category, ClassifierConfig, Difficulty,
    HeightBucket,
};
use blockport_blocks::{BlockSet, TargetCatalog};

const SHAPES: &str = r#"{
    "blocks": {
        "stone": 1,
        "oak_stairs": [2, 3],
        "air": 0,
        "white_carpet": 4,
        "ghost": [42]
    },
    "shapes": {
        "0": [],
        "1": [[0, 0, 0, 0.5, 0.5, 0.5]],
        "2": [[0, 0, 0, 0.5, 0.25, 0.5], [0, 0.25, 0, 0.5, 0.5, 0.25]],
        "3": [[0, 0, 0, 0.5, 0.25, 0.5], [0, 0.25, 0.25, 0.5, 0.5, 0.5]],
        "4": [[0, 0, 0, 0.5, 0.0625, 0.5]]
    }
}"#;

const BLOCK_LIST: &str = r#"[
    {"name": "stone", "displayName": "Stone", "boundingBox": "block"},
    {"name": "oak_stairs", "displayName": "Oak Stairs", "boundingBox": "block"},
    {"name": "air", "displayName": "Air", "boundingBox": "empty"},
    {"name": "white_carpet", "displayName": "White Carpet", "boundingBox": "block"},
    {"name": "ghost", "displayName": "Ghost", "boundingBox": "block"}
]"#;

#[test]
fn records_follow_input_order_and_carry_everything() {
    let set = BlockSet::from_json_strs(SHAPES, Some(BLOCK_LIST)).unwrap();
    let catalog = TargetCatalog::builtin();
    let ctx = AnalysisContext {
        set: &set,
        catalog: &catalog,
        classifier: ClassifierConfig::default(),
    };
    let records = analyze_all(&ctx);
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["stone", "oak_stairs", "air", "white_carpet", "ghost"]);

    let stone = &records[0];
    assert_eq!(stone.category, Category::Full);
    assert_eq!(stone.height_bucket, HeightBucket::Half);
    assert_eq!(stone.target.as_deref(), Some("stone"));
    assert_eq!(stone.display_name.as_deref(), Some("Stone"));

    let stairs = &records[1];
    assert_eq!(stairs.category, Category::Special);
    assert_eq!(stairs.semantics.kind, BlockKind::Stairs);
    let rec = stairs.recommendation.as_ref().unwrap();
    assert_eq!(rec.difficulty, Difficulty::Hard);
    assert_eq!(rec.strategy, "Simplified stair block");

    let air = &records[2];
    assert_eq!(air.category, Category::NonStandard);
    assert_eq!(air.height, 0.0);
    assert_eq!(air.target, None);

    let carpet = &records[3];
    assert_eq!(carpet.category, Category::Partial);
    assert_eq!(carpet.height_bucket, HeightBucket::Minimal);
    assert!(carpet.recommendation.as_ref().unwrap().notes.contains("0.0625"));

    // Index 42 is missing from the table and resolves to no collision
    let ghost = &records[4];
    assert_eq!(ghost.shape_ids, vec![Some(42)]);
    assert_eq!(ghost.category, Category::NonStandard);
}

#[test]
fn unit_extent_config_reclassifies() {
    let shapes = r#"{"blocks": {"stone": 0}, "shapes": {"0": [[0, 0, 0, 1, 1, 1]]}}"#;
    let set = BlockSet::from_json_strs(shapes, None).unwrap();
    let catalog = TargetCatalog::builtin();
    let mut ctx = AnalysisContext {
        set: &set,
        catalog: &catalog,
        classifier: ClassifierConfig::default(),
    };
    assert_eq!(analyze_all(&ctx)[0].category, Category::NonStandard);
    ctx.classifier = ClassifierConfig { full_extent: 1.0 };
    let r = &analyze_all(&ctx)[0];
    assert_eq!(r.category, Category::Full);
    assert_eq!(r.height_bucket, HeightBucket::Full);
}

#[test]
fn unit_extent_config_reaches_advice() {
    let shapes = r#"{"blocks": {"post": 0}, "shapes": {"0": [[0.125, 0, 0.125, 0.875, 1, 0.875]]}}"#;
    let set = BlockSet::from_json_strs(shapes, None).unwrap();
    let catalog = TargetCatalog::builtin();
    let ctx = AnalysisContext {
        set: &set,
        catalog: &catalog,
        classifier: ClassifierConfig { full_extent: 1.0 },
    };
    let r = &analyze_all(&ctx)[0];
    assert_eq!(r.category, Category::Partial);
    let rec = r.recommendation.as_ref().unwrap();
    assert_eq!(rec.strategy, "Convert as centered post");
}
