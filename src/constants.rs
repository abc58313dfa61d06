use const_format::formatcp;
use phf::phf_set;

pub(crate) mod localization {
    pub const NAME_NOT_FOUND_MSG: &str = "name not found";
    pub const MISSING_ITEM_MSG: &str = "missing item";
    pub const NOT_SUPPORTED_MSG: &str = "category not supported";
    pub const UNRESOLVED_LOCATION_MSG: &str = "card location not resolved";
    pub const MALFORMED_MSG: &str = "malformed parameters";
    pub const INVALID_ID_MSG: &str = "invalid id";

    pub const INVALID_SLOT_COUNT_MSG: &str =
        "Couldn't parse slot count. The line won't be used.";
    pub const PARSED_RECORDS_MSG: &str = "Parsed records";
    pub const WROTE_FILE_MSG: &str = "Wrote file";
}

// Parameter names, as they appear before the colon.
pub const WEIGHT: &str = "重量";
pub const SERIES: &str = "系列";
pub const KIND: &str = "種類";
pub const EQUIP: &str = "装備";
pub const EQUIP_WORN: &str = "装着";
pub const EQUIP_BY_CLASS: &str = "装備職業";
pub const ATTACK: &str = "攻撃";
pub const ATK: &str = "Atk";
pub const MATK: &str = "Matk";
pub const WEAPON_LEVEL: &str = "武器レベル";
pub const REQUIRED_LEVEL: &str = "要求レベル";
pub const SLOT: &str = "スロット";
pub const ELEMENT: &str = "属性";
pub const REFINE: &str = "精錬";
pub const BREAK: &str = "破損";
pub const POSITION: &str = "位置";
pub const DEFENSE: &str = "防御";
pub const DEF: &str = "Def";
pub const MDEF: &str = "Mdef";
pub const FEED: &str = "餌";
pub const ACCESSORY: &str = "アクセサリー";

pub const ABSENT: &str = "-";
pub const LEVEL_NONE: [&str; 2] = ["無し", "なし"];
pub const ELEMENT_NONE: &str = "無";
pub const REFINABLE: &str = "可";
pub const BREAKABLE: &str = "する";

pub const CARD_SERIES: &str = "カード";
pub const SHADOW_SERIES: &str = "シャドウ";
pub const COSTUME_SERIES: &str = "衣装";
pub const BODY_ARMOR_SERIES: &str = "鎧";

pub const WEAPON_SERIES: phf::Set<&'static str> = phf_set! {
    "カタール", "ガトリングガン", "グレネードガン", "ショットガン", "ハンドガン",
    "ライフル", "両手剣", "両手斧", "両手杖", "両手槍", "剣", "弓", "手裏剣", "斧",
    "本", "杖", "楽器", "槍", "爪", "片手剣", "片手斧", "片手杖", "片手槍", "短剣",
    "鈍器", "鞭", "風魔手裏剣",
};

pub const ARMOR_SERIES: phf::Set<&'static str> = phf_set! {
    "アクセサリー", "アクセサリー(1)", "アクセサリー(2)", "兜", "鎧", "盾",
    "肩にかけるもの", "肩にかける物", "肩に掛けるもの", "靴",
};

pub const AMMUNITION_SERIES: phf::Set<&'static str> = phf_set! {
    "矢", "投擲", "弾", "砲弾",
};

/// Both spellings of the cute pet equipment series exist in the tables, one of them with a full-width minus.
pub const PET_SERIES: phf::Set<&'static str> = phf_set! {
    "モンスターの卵", "テイミングアイテム", "キューペット装備", "キュ－ペット装備",
};

pub const COMMENT_PREFIX: &str = "//";
pub const RECORD_BOUNDARY: &str = "#";
pub const TABLE_SEPARATOR: char = '#';

pub const COLOR_ON: &str = "^777777";
pub const COLOR_OFF: &str = "^000000";
pub const COLOR_WHITE: &str = "^ffffff";

pub const DESCRIPTION_SEPARATOR: &str = "―――――――――――――";
/// How the separator line is written when it's drawn as a colored underscore.
pub const RENDERED_SEPARATOR: &str = formatcp!("{COLOR_WHITE}_{COLOR_OFF}");

pub const FULLWIDTH_SPACE: char = '\u{3000}';
pub const FULLWIDTH_MINUS: char = '－';
pub const PROLONGED_SOUND_MARK: &str = "ー";

pub const DESCRIPTION_FILE: &str = "idnum2itemdesctable.txt";
pub const NAMES_FILE: &str = "idnum2itemdisplaynametable.txt";
pub const SLOTS_FILE: &str = "itemslotcounttable.txt";
pub const CARD_PREFIX_FILE: &str = "cardprefixnametable.txt";
pub const CARD_POSTFIX_FILE: &str = "cardpostfixnametable.txt";
pub const OUTPUT_FILE: &str = "items.json";
