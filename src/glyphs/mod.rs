//! Glyph tables.
//!
//! A glyph is a short Discord emoji token (`<:NAME:id>`) or shortcode that
//! stands in for a school, stat or status effect in rendered text. All
//! tables are immutable statics; nothing here allocates.

mod icons;

pub use icons::icon_glyph;

// === Schools ===
pub const UNIVERSAL: &str = "<:A_:1111511060839669820>";
pub const FIRE: &str = "<:F_:1111509221054361700>";
pub const ICE: &str = "<:I_:1111509224506265761>";
pub const STORM: &str = "<:S_:1111509228541190214>";
pub const DEATH: &str = "<:D_:1111509223591915560>";
pub const LIFE: &str = "<:L_:1111509357679628298>";
pub const MYTH: &str = "<:M_:1111509222480416849>";
pub const BALANCE: &str = "<:B_:1111509219968045166>";
pub const SUN: &str = "<:S_:1111509218898481184>";
pub const STAR: &str = "<:S_:1111509217921220629>";
pub const MOON: &str = "<:M_:1111509325744189553>";
pub const GARDENING: &str = "<:G_:1110954212566761604>";
pub const SHADOW: &str = "<:S_:1111509216432242748>";
pub const FISHING: &str = "<:F_:1110954210557694154>";
pub const CANTRIPS: &str = "<:C_:1099490127983673434>";
pub const CASTLEMAGIC: &str = "<:CM:1110953210694353028>";
pub const WHIRLYBURLY: &str = "<:U_:1099498462711648416>";

// === Stats ===
pub const HEART: &str = "<:H_:1099490441268834365>";
pub const HEALTH: &str = "<:H_:1099490340685226166>";
pub const MANA: &str = "<:M_:1099494269959557240>";
pub const ENERGY: &str = "<:E_:1099494247381598279>";
pub const DAMAGE: &str = "<:D_:1099490157587075075>";
pub const FLAT_DAMAGE: &str = "<:F_:1099504205175206009>";
pub const RESIST: &str = "<:R_:1099490284083101706>";
pub const FLAT_RESIST: &str = "<:F_:1099504248179404911>";
pub const ACCURACY: &str = "<:A_:1099490418661531678>";
pub const CRIT: &str = "<:C_:1099490127983673434>";
pub const BLOCK: &str = "<:B_:1099490076670570526>";
pub const PIERCE: &str = "<:P_:1099490253686980622>";
pub const INCOMING: &str = "<:I_:1099494559907581982>";
pub const OUTGOING: &str = "<:O_:1099490223680913591>";
pub const STUN_BLOCK: &str = "<:S_:1099499321528942622>";
pub const PIP_CONVERSION: &str = "<:PC:1099498554277507073>";
pub const ARCHMASTERY: &str = "<:A_:1099498588008095845>";

// === Pips ===
pub const PIP: &str = "<:P_:1099498720686526596>";
pub const POWER_PIP: &str = "<:PP:1099490366832525422>";
pub const SHADOW_PIP: &str = "<:SP:1099490394884014090>";
pub const SHADOW_PIP_STAT: &str = "<:SP:1111511532472385599>";

// === Spell types and status effects ===
pub const NONE: &str = "<:NA:1107114212142100480>";
pub const CHARM: &str = "<:C_:1107749929880911953>";
pub const WARD: &str = "<:W_:1107116033279524946>";
pub const AURA: &str = "<:A_:1107114218714583050>";
pub const GLOBAL: &str = "<:U_:1099498462711648416>";
pub const AOE: &str = "<:A_:1107752173271531601>";
pub const STEAL: &str = "<:S_:1107116039034122281>";
pub const MANIPULATION: &str = "<:M_:1107113759757049956>";
pub const ENCHANTMENT: &str = "<:E_:1107114210862829578>";
pub const AURA_NEGATIVE: &str = "<:AN:1107114217632440491>";
pub const BLADE: &str = "<:B_:1107114216420294696>";
pub const CURSE: &str = "<:C_:1107114214738382848>";
pub const DOT: &str = "<:DOT:1107113767868842094>";
pub const BOMB: &str = "<:B_:1107113765511626863>";
pub const HOT: &str = "<:HOT:1107113760927252501>";
pub const JINX: &str = "<:J_:1107114209390637126>";
pub const MUTATE: &str = "<:M_:1107113757693448202>";
pub const PABSORB: &str = "<:PA:1107113758289047615>";
pub const PBLADE: &str = "<:PB:1107113756397420556>";
pub const PCHARM: &str = "<:PC:1107113755428524064>";
pub const PCURSE: &str = "<:PC:1107113754883280956>";
pub const PDOT: &str = "<:PD:1107113753541099561>";
pub const PBOMB: &str = "<:PB:1107116043316506644>";
pub const PHOT: &str = "<:PH:1107116041928200294>";
pub const PJINX: &str = "<:PJ:1107116040606982279>";
pub const POLYMORPH: &str = "<:P_:1107118045744332812>";
pub const PTRAP: &str = "<:PT:1107116039994617887>";
pub const PWARD: &str = "<:PW:1107133878575059044>";
pub const RANDOM: &str = "<:R_:1107133876603715644>";
pub const TRAP: &str = "<:T_:1107116031417266187>";
pub const THREAT: &str = "<:TH:1107113771173949460>";
pub const STUN: &str = "<:S_:1107114221021450250>";
pub const DISPEL: &str = "<:D_:1107114277665525852>";
pub const MINION: &str = "<:M_:1107114223496081518>";
pub const ROUNDS: &str = "<:R_:1107133797109075988>";
pub const SPIRIT: &str = "<:S_:1107113774378405901>";
pub const ELEMENTAL: &str = "<:E_:1107111620800426024>";
pub const ALL_ENEMIES: &str = "<:AE:1107111669961855018>";
pub const ALL_FRIENDS: &str = "<:AF:1107111568463908905>";
pub const ALL_ENEMIES_SQUARE: &str = "<:ES:1107749884880228472>";
pub const ALL_FRIENDS_SQUARE: &str = "<:FS:1107749883101839390>";
pub const ALL_ENEMIES_SELECT: &str = "<:E_:1222021754986430504>";
pub const ALL_FRIENDS_SELECT: &str = "<:F_:1222021790184898621>";
pub const AFTERLIFE: &str = "<:AL:1107111534506823840>";
pub const ABSORB: &str = "<:A_:1107111476730286141>";
pub const DAMAGE_OR_DRAIN: &str = "<:DD:1107111451342147645>";
pub const SELF: &str = "<:S_:1107111430278357093>";
pub const CLOAK: &str = "<:C_:1107111407138394113>";
pub const CHROMATIC_CASTER: &str = "<:CC:1222566258705432596>";
pub const CHROMATIC_TARGET: &str = "<:CT:1222566223431077968>";
pub const SHIELD: &str = "<:S_:1222565837978730538>";
pub const WEAKNESS: &str = "<:W_:1222565866806186038>";

// === Target shapes without a custom emoji ===

/// Single enemy target.
pub const ENEMY_SINGLE: &str = ":dart:";
/// Single friendly target.
pub const FRIENDLY_SINGLE: &str = ":handshake:";

// === Gardening types ===
pub const GROWING: &str = "<:GR:1110956271928086709>";
pub const PEST: &str = "<:P_:1110956273014427778>";
pub const SOIL: &str = "<:S_:1110956263740821614>";
pub const G_UTILITY: &str = "<:U_:1110956270804021358>";
pub const PROTECTION: &str = "<:P_:1110958909918806076>";

// === Fishing types ===
pub const CATCHING: &str = "<:C_:1110956269851922572>";
pub const FS_UTILITY: &str = "<:U_:1110956265951199293>";

// === Cantrip types ===
pub const INCANTATION: &str = "<:F_:1110957277042725047>";
pub const BENEFICIAL: &str = "<:B_:1110956268434247780>";
pub const SIGIL: &str = "<:S_:1110957279940984872>";
pub const TELEPORTATION: &str = "<:T_:1110957278540070983>";
pub const RITUAL: &str = "<:R_:1110956267134013543>";
