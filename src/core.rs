use crate::{constants::*, params::Params, types::*};
use regex::Regex;
use std::cell::LazyCell;

thread_local! {
    static MATK_LINE_RE: LazyCell<Regex> = LazyCell::new(|| unsafe {
        Regex::new(r"^Matk \+ (\d+)$").unwrap_unchecked()
    });
    static ARMOR_ELEMENT_LINE_RE: LazyCell<Regex> = LazyCell::new(|| unsafe {
        Regex::new(r"^鎧に(.+)属性を付与する$").unwrap_unchecked()
    });
}

pub type Predicate = fn(&Params) -> bool;
pub type Builder = fn(&Params, &[String]) -> Result<Attributes, RecordError>;

/// Categories in the order they're tested. The first matching predicate decides.
///
/// Item goes first: a weight alone doesn't tell much, but a weight without a series or a kind does.
pub static CLASSIFIERS: [(Category, Predicate, Builder); 9] = [
    (Category::Item, is_item, build_item),
    (Category::Card, is_card, build_card),
    (Category::Enchant, is_enchant, build_enchant),
    (Category::Shadow, is_shadow, build_armor),
    (Category::Weapon, is_weapon, build_weapon),
    (Category::Armor, is_armor, build_armor),
    (Category::Costume, is_costume, build_armor),
    (Category::Ammunition, is_ammunition, build_ammunition),
    (Category::Pet, is_pet, build_pet),
];

#[inline]
fn series_in(params: &Params, set: &phf::Set<&'static str>) -> bool {
    params.value(SERIES).is_some_and(|series| set.contains(series))
}

pub fn is_item(params: &Params) -> bool {
    params.exists(WEIGHT) && !params.exists(SERIES) && !params.exists(KIND)
}

pub fn is_card(params: &Params) -> bool {
    params.value(SERIES) == Some(CARD_SERIES)
}

pub fn is_enchant(params: &Params) -> bool {
    !params.exists(WEIGHT) && !params.exists(KIND) && !params.exists(SERIES)
}

pub fn is_shadow(params: &Params) -> bool {
    params.value(SERIES) == Some(SHADOW_SERIES)
}

pub fn is_weapon(params: &Params) -> bool {
    series_in(params, &WEAPON_SERIES)
}

pub fn is_armor(params: &Params) -> bool {
    series_in(params, &ARMOR_SERIES)
}

pub fn is_costume(params: &Params) -> bool {
    params.value(SERIES) == Some(COSTUME_SERIES)
}

pub fn is_ammunition(params: &Params) -> bool {
    series_in(params, &AMMUNITION_SERIES)
}

pub fn is_pet(params: &Params) -> bool {
    params.value(KIND).is_some_and(|kind| PET_SERIES.contains(kind))
        || series_in(params, &PET_SERIES)
}

fn classifier(
    params: &Params,
) -> Option<&'static (Category, Predicate, Builder)> {
    CLASSIFIERS.iter().find(|(_, matches, _)| matches(params))
}

/// Returns the category of the first matching predicate.
#[must_use]
pub fn classify(params: &Params) -> Option<Category> {
    classifier(params).map(|(category, _, _)| *category)
}

/// Classifies the parameters and builds the record.
///
/// Returns `None` when no category matches.
pub fn build_record(
    id: u32,
    name: &str,
    description: Vec<String>,
    params: &Params,
) -> Option<Result<Record, RecordError>> {
    let (category, _, build) = classifier(params)?;

    let attributes = match build(params, &description) {
        Ok(attributes) => attributes,
        Err(err) => return Some(Err(err)),
    };

    Some(Ok(Record {
        id,
        name: name.to_owned(),
        description,
        category: *category,
        attributes,
    }))
}

/// `無し` and `なし` mean there's no level requirement, which is level 1.
fn required_level(params: &Params) -> i32 {
    match params.value(REQUIRED_LEVEL) {
        Some(level) if !LEVEL_NONE.contains(&level) => {
            level.parse().unwrap_or(1)
        }
        _ => 1,
    }
}

fn attack(params: &Params) -> i32 {
    params
        .number(ATK)
        .unwrap_or_else(|| params.number_or(ATTACK, 0))
}

/// Some descriptions state magic attack as a `Matk + N` line, which takes precedence over the parameter.
fn magic_attack(params: &Params, description: &[String]) -> i32 {
    let from_description: Option<i32> = MATK_LINE_RE.with(|re| {
        description
            .iter()
            .filter_map(|line| re.captures(line))
            .filter_map(|captures| captures[1].parse().ok())
            .last()
    });

    from_description.unwrap_or_else(|| params.number_or(MATK, 0))
}

fn classes(value: Option<&str>) -> Classes {
    value
        .map(|value| value.split_whitespace().map(str::to_owned).collect())
        .unwrap_or_default()
}

fn build_item(
    params: &Params,
    _: &[String],
) -> Result<Attributes, RecordError> {
    Ok(Attributes::Item(ItemAttributes {
        weight: params.required(WEIGHT)?,
    }))
}

fn build_card(
    params: &Params,
    _: &[String],
) -> Result<Attributes, RecordError> {
    let location: Option<Gear> = params
        .value(EQUIP_WORN)
        .or_else(|| params.value(EQUIP))
        .and_then(Gear::resolve);

    Ok(Attributes::Card(CardAttributes {
        weight: params.required(WEIGHT)?,
        location,
        prefix: String::new(),
        postfix: String::new(),
    }))
}

fn build_enchant(_: &Params, _: &[String]) -> Result<Attributes, RecordError> {
    Ok(Attributes::Enchant(EnchantAttributes {}))
}

fn build_weapon(
    params: &Params,
    description: &[String],
) -> Result<Attributes, RecordError> {
    Ok(Attributes::Weapon(WeaponAttributes {
        series: params.value_or(SERIES, "").to_owned(),
        attack: attack(params),
        weight: params.required(WEIGHT)?,
        weapon_level: params.number_or(WEAPON_LEVEL, 0),
        required_level: required_level(params),
        equippable: classes(params.value(EQUIP)),
        magic_attack: magic_attack(params, description),
        slot: params.number_or(SLOT, 0),
        elemental: params.value_or(ELEMENT, ELEMENT_NONE).to_owned(),
        refining: params.value_or(REFINE, REFINABLE).to_owned(),
        destruction: params.value_or(BREAK, BREAKABLE).to_owned(),
    }))
}

/// Used for armors, shadow gear and costumes alike.
fn build_armor(
    params: &Params,
    description: &[String],
) -> Result<Attributes, RecordError> {
    let series: &str = params.value_or(SERIES, "");

    // Only body armors carry an element, and descriptions may grant one.
    let elemental: String = if series == BODY_ARMOR_SERIES {
        ARMOR_ELEMENT_LINE_RE
            .with(|re| {
                description
                    .iter()
                    .find_map(|line| re.captures(line))
                    .map(|captures| captures[1].to_owned())
            })
            .unwrap_or_else(|| {
                params.value_or(ELEMENT, ELEMENT_NONE).to_owned()
            })
    } else {
        ABSENT.to_owned()
    };

    let equippable: Option<&str> = params
        .value(EQUIP_BY_CLASS)
        .or_else(|| params.value(EQUIP_WORN))
        .or_else(|| params.value(EQUIP));

    Ok(Attributes::Armor(ArmorAttributes {
        series: series.to_owned(),
        position: params.value_or(POSITION, ABSENT).to_owned(),
        defense: params
            .number(DEF)
            .unwrap_or_else(|| params.number_or(DEFENSE, 0)),
        magic_defense: params.number_or(MDEF, 0),
        weight: params.required(WEIGHT)?,
        required_level: required_level(params),
        equippable: classes(equippable),
        slot: params.number_or(SLOT, 0),
        elemental,
        refining: params.value_or(REFINE, REFINABLE).to_owned(),
        destruction: params.value_or(BREAK, BREAKABLE).to_owned(),
    }))
}

fn build_ammunition(
    params: &Params,
    description: &[String],
) -> Result<Attributes, RecordError> {
    Ok(Attributes::Ammunition(AmmunitionAttributes {
        series: params.value_or(SERIES, "").to_owned(),
        weight: params.required(WEIGHT)?,
        attack: attack(params),
        magic_attack: magic_attack(params, description),
        elemental: params.value_or(ELEMENT, ELEMENT_NONE).to_owned(),
        required_level: required_level(params),
    }))
}

fn build_pet(params: &Params, _: &[String]) -> Result<Attributes, RecordError> {
    let kind: &str = params
        .value(KIND)
        .or_else(|| params.value(SERIES))
        .unwrap_or_default();

    Ok(Attributes::Pet(PetAttributes {
        weight: params.number_or(WEIGHT, 0.0),
        kind: kind.replace(FULLWIDTH_MINUS, PROLONGED_SOUND_MARK),
        feed: params.value(FEED).map(str::to_owned),
        accessory: params.value(ACCESSORY).map(str::to_owned),
        equippable: params.value(EQUIP).map(str::to_owned),
    }))
}

impl Record {
    /// Overwrites a card's prefix and postfix. No effect on other categories.
    pub fn apply_affix(&mut self, affix: &Affix) {
        if let Attributes::Card(card) = &mut self.attributes {
            card.prefix.clone_from(&affix.prefix);
            card.postfix.clone_from(&affix.postfix);
        }
    }

    /// Overwrites the slot count of weapons, armors, shadow gear and costumes.
    pub fn apply_slot(&mut self, slot: i32) {
        match &mut self.attributes {
            Attributes::Weapon(weapon) => weapon.slot = slot,
            Attributes::Armor(armor) => armor.slot = slot,
            _ => {}
        }
    }
}

/// Applies the external tables to a freshly built record. `key` is the id as written in the tables.
pub fn enrich(record: &mut Record, key: &str, tables: &Tables) {
    if record.category.is_card() {
        if let Some(affix) = tables.affixes.get(key) {
            record.apply_affix(affix);
        }
    } else if record.category.has_slots() {
        if let Some(&slot) = tables.slots.get(key) {
            record.apply_slot(slot);
        }
    }
}
