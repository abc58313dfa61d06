use itemdesc_rs_lib::{
    core::{build_record, enrich},
    params::Params,
    types::*,
};

fn params(tokens: &[&str]) -> Params {
    Params::from(tokens.iter().map(|t| (*t).to_owned()).collect::<Vec<_>>())
}

fn lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| (*l).to_owned()).collect()
}

fn build(tokens: &[&str], description: &[&str]) -> Record {
    build_record(1, "Test", lines(description), &params(tokens))
        .unwrap()
        .unwrap()
}

fn weapon(record: &Record) -> &WeaponAttributes {
    match &record.attributes {
        Attributes::Weapon(weapon) => weapon,
        other => panic!("not a weapon: {other:?}"),
    }
}

fn armor(record: &Record) -> &ArmorAttributes {
    match &record.attributes {
        Attributes::Armor(armor) => armor,
        other => panic!("not an armor: {other:?}"),
    }
}

fn ammunition(record: &Record) -> &AmmunitionAttributes {
    match &record.attributes {
        Attributes::Ammunition(ammunition) => ammunition,
        other => panic!("not ammunition: {other:?}"),
    }
}

const SWORD: [&str; 6] = ["系列:", "片手剣", "重量:", "50", "武器レベル:", "2"];

fn sword_with(extra: &[&'static str]) -> Vec<&'static str> {
    let mut tokens = SWORD.to_vec();
    tokens.extend_from_slice(extra);
    tokens
}

#[test]
fn weapon_defaults() {
    let record = build(&SWORD, &[]);
    let sword = weapon(&record);

    assert_eq!(record.category, Category::Weapon);
    assert_eq!(sword.series, "片手剣");
    assert_eq!(sword.attack, 0);
    assert_eq!(sword.weight, 50.0);
    assert_eq!(sword.weapon_level, 2);
    assert_eq!(sword.required_level, 1);
    assert!(sword.equippable.is_empty());
    assert_eq!(sword.magic_attack, 0);
    assert_eq!(sword.slot, 0);
    assert_eq!(sword.elemental, "無");
    assert_eq!(sword.refining, "可");
    assert_eq!(sword.destruction, "する");
}

#[test]
fn weapon_atk_overrides_attack() {
    let record = build(&sword_with(&["攻撃:", "5", "Atk:", "50"]), &[]);
    assert_eq!(weapon(&record).attack, 50);

    let record = build(&sword_with(&["攻撃:", "5"]), &[]);
    assert_eq!(weapon(&record).attack, 5);
}

#[test]
fn weapon_fields_from_params() {
    let record = build(
        &sword_with(&[
            "装備:",
            "ソードマン系 マーチャント系",
            "スロット:",
            "3",
            "属性:",
            "火",
            "精錬:",
            "不可",
            "破損:",
            "しない",
            "Matk:",
            "20",
        ]),
        &[],
    );
    let sword = weapon(&record);

    assert_eq!(sword.equippable.as_slice(), ["ソードマン系", "マーチャント系"]);
    assert_eq!(sword.slot, 3);
    assert_eq!(sword.elemental, "火");
    assert_eq!(sword.refining, "不可");
    assert_eq!(sword.destruction, "しない");
    assert_eq!(sword.magic_attack, 20);
}

#[test]
fn magic_attack_from_description() {
    let record = build(&SWORD, &["MATKが上昇する", "Matk + 15"]);
    assert_eq!(weapon(&record).magic_attack, 15);

    let record = build(
        &sword_with(&["Matk:", "10"]),
        &["Matk + 15", "Matk + 30"],
    );
    assert_eq!(weapon(&record).magic_attack, 30);

    let record = build(&SWORD, &["Matk + 15%"]);
    assert_eq!(weapon(&record).magic_attack, 0);
}

#[test]
fn required_level_defaults_to_one() {
    let series = [
        ("片手剣", Category::Weapon),
        ("兜", Category::Armor),
        ("矢", Category::Ammunition),
    ];

    for (series, category) in series {
        for (value, expected) in
            [(None, 1), (Some("無し"), 1), (Some("なし"), 1), (Some("45"), 45)]
        {
            let mut tokens = vec!["系列:", series, "重量:", "1"];

            if let Some(value) = value {
                tokens.extend(["要求レベル:", value]);
            }

            let record = build(&tokens, &[]);
            assert_eq!(record.category, category);

            let level = match &record.attributes {
                Attributes::Weapon(weapon) => weapon.required_level,
                Attributes::Armor(armor) => armor.required_level,
                Attributes::Ammunition(ammunition) => ammunition.required_level,
                other => panic!("unexpected {other:?}"),
            };

            assert_eq!(level, expected, "{series} {value:?}");
        }
    }
}

#[test]
fn armor_defaults_and_overrides() {
    let record = build(
        &["系列:", "兜", "防御:", "3", "Def:", "10", "Mdef:", "2", "重量:", "20"],
        &[],
    );
    let helm = armor(&record);

    assert_eq!(record.category, Category::Armor);
    assert_eq!(helm.position, "-");
    assert_eq!(helm.defense, 10);
    assert_eq!(helm.magic_defense, 2);
    assert_eq!(helm.weight, 20.0);
    assert_eq!(helm.elemental, "-");
    assert_eq!(helm.refining, "可");
    assert_eq!(helm.destruction, "する");
}

#[test]
fn only_body_armor_has_element() {
    let record = build(
        &["系列:", "兜", "属性:", "水", "重量:", "20"],
        &["鎧に火属性を付与する"],
    );
    assert_eq!(armor(&record).elemental, "-");

    let record = build(&["系列:", "鎧", "重量:", "20"], &[]);
    assert_eq!(armor(&record).elemental, "無");

    let record = build(&["系列:", "鎧", "属性:", "水", "重量:", "20"], &[]);
    assert_eq!(armor(&record).elemental, "水");

    let record = build(
        &["系列:", "鎧", "属性:", "水", "重量:", "20"],
        &["鎧に火属性を付与する", "鎧に風属性を付与する"],
    );
    assert_eq!(armor(&record).elemental, "火");
}

#[test]
fn armor_equippable_priority() {
    let record = build(
        &[
            "系列:",
            "盾",
            "重量:",
            "1",
            "装備:",
            "全ての職業",
            "装着:",
            "ノービス",
            "装備職業:",
            "アコライト系 プリースト",
        ],
        &[],
    );
    assert_eq!(armor(&record).equippable.as_slice(), ["アコライト系", "プリースト"]);

    let record = build(
        &["系列:", "盾", "重量:", "1", "装備:", "全ての職業", "装着:", "ノービス"],
        &[],
    );
    assert_eq!(armor(&record).equippable.as_slice(), ["ノービス"]);

    let record = build(&["系列:", "盾", "重量:", "1", "装備:", "全ての職業"], &[]);
    assert_eq!(armor(&record).equippable.as_slice(), ["全ての職業"]);
}

#[test]
fn shadow_and_costume_share_armor_fields() {
    let record = build(&["系列:", "シャドウ", "位置:", "鎧", "重量:", "0"], &[]);
    assert_eq!(record.category, Category::Shadow);
    assert_eq!(armor(&record).position, "鎧");

    let record = build(&["系列:", "衣装", "位置:", "上段", "重量:", "0"], &[]);
    assert_eq!(record.category, Category::Costume);
    assert_eq!(armor(&record).series, "衣装");
}

#[test]
fn ammunition_fields() {
    let record = build(
        &["系列:", "矢", "攻撃:", "25", "属性:", "火", "重量:", "0.1"],
        &["Matk + 5"],
    );
    let arrow = ammunition(&record);

    assert_eq!(arrow.series, "矢");
    assert_eq!(arrow.attack, 25);
    assert_eq!(arrow.magic_attack, 5);
    assert_eq!(arrow.elemental, "火");
    assert_eq!(arrow.weight, 0.1);
}

#[test]
fn card_location() {
    let record = build(&["系列:", "カード", "装備:", "兜", "重量:", "1"], &[]);
    let Attributes::Card(card) = &record.attributes else {
        panic!("not a card");
    };
    assert_eq!(card.location, Some(Gear::Headgear));
    assert!(card.prefix.is_empty() && card.postfix.is_empty());

    let record = build(
        &["系列:", "カード", "装備:", "兜", "装着:", "肩にかけるもの", "重量:", "1"],
        &[],
    );
    let Attributes::Card(card) = &record.attributes else {
        panic!("not a card");
    };
    assert_eq!(card.location, Some(Gear::Garment));

    let record = build(&["系列:", "カード", "装備:", "尻尾", "重量:", "1"], &[]);
    let Attributes::Card(card) = &record.attributes else {
        panic!("not a card");
    };
    assert_eq!(card.location, None);
}

#[test]
fn pet_fields() {
    let record = build(&["系列:", "キュ－ペット装備", "装備:", "ポリン"], &[]);
    let Attributes::Pet(pet) = &record.attributes else {
        panic!("not a pet");
    };
    assert_eq!(pet.weight, 0.0);
    assert_eq!(pet.kind, "キューペット装備");
    assert_eq!(pet.feed, None);
    assert_eq!(pet.accessory, None);
    assert_eq!(pet.equippable.as_deref(), Some("ポリン"));

    let record = build(
        &["種類:", "モンスターの卵", "系列:", "卵", "餌:", "リンゴ", "重量:", "20"],
        &[],
    );
    let Attributes::Pet(pet) = &record.attributes else {
        panic!("not a pet");
    };
    assert_eq!(pet.kind, "モンスターの卵");
    assert_eq!(pet.feed.as_deref(), Some("リンゴ"));
    assert_eq!(pet.weight, 20.0);
}

#[test]
fn missing_weight_is_malformed() {
    let result = build_record(1, "Test", vec![], &params(&["系列:", "片手剣"]));
    assert_eq!(result, Some(Err(RecordError::MissingParameter("重量"))));

    let result = build_record(1, "Test", vec![], &params(&["系列:", "矢", "重量:", "軽い"]));
    assert_eq!(
        result,
        Some(Err(RecordError::InvalidNumber {
            parameter: "重量",
            value: "軽い".to_owned(),
        }))
    );
}

#[test]
fn unsupported_builds_nothing() {
    assert_eq!(
        build_record(1, "Test", vec![], &params(&["系列:", "釣り竿", "重量:", "1"])),
        None
    );
}

#[test]
fn enrichment_touches_only_matching_categories() {
    let tables = Tables {
        slots: [("1".to_owned(), 4)].into_iter().collect(),
        affixes: [("1".to_owned(), Affix::postfix("of Flame"))].into_iter().collect(),
        ..Default::default()
    };

    let mut record = build(&SWORD, &[]);
    enrich(&mut record, "1", &tables);
    assert_eq!(weapon(&record).slot, 4);

    let mut record = build(&["系列:", "衣装", "重量:", "0", "スロット:", "1"], &[]);
    enrich(&mut record, "1", &tables);
    assert_eq!(armor(&record).slot, 4);

    let mut record = build(&["系列:", "矢", "重量:", "0"], &[]);
    let before = record.clone();
    enrich(&mut record, "1", &tables);
    assert_eq!(record, before);

    let mut record = build(&["系列:", "カード", "装備:", "武器", "重量:", "1"], &[]);
    enrich(&mut record, "1", &tables);
    let Attributes::Card(card) = &record.attributes else {
        panic!("not a card");
    };
    assert_eq!(card.prefix, "");
    assert_eq!(card.postfix, "of Flame");
}

#[test]
fn serializes_flat_in_field_order() {
    let record = build_record(
        501,
        "Red Potion",
        lines(&["A red potion."]),
        &params(&["重量:", "7"]),
    )
    .unwrap()
    .unwrap();

    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"id":501,"name":"Red Potion","description":["A red potion."],"category":"アイテム","weight":7.0}"#
    );

    let record = build(&["系列:", "モンスターの卵", "重量:", "20"], &[]);
    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"id":1,"name":"Test","description":[],"category":"ペット系","weight":20.0,"type":"モンスターの卵"}"#
    );

    let record = build(&["効果:", "Atk + 1"], &[]);
    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"id":1,"name":"Test","description":[],"category":"エンチャント"}"#
    );
}
