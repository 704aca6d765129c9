//! Leaf effect kinds.
//!
//! The set mirrors the game's spell effect enumeration and is closed: every
//! stored discriminant maps to exactly one variant. Ids this crate does not
//! know (effects added by later game updates) fold to `EffectKind::Invalid`
//! so they render as nothing instead of failing the whole description.

use serde::{Deserialize, Serialize};

/// What a leaf effect does.
///
/// Discriminants match the values stored on effect rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    #[default]
    Invalid = 0,
    Damage = 1,
    DamageNoCrit = 2,
    Heal = 3,
    HealPercent = 4,
    SetHealPercent = 5,
    StealHealth = 6,
    ReduceOverTime = 7,
    DetonateOverTime = 8,
    PushCharm = 9,
    StealCharm = 10,
    PushWard = 11,
    StealWard = 12,
    PushOverTime = 13,
    StealOverTime = 14,
    RemoveCharm = 15,
    RemoveWard = 16,
    RemoveOverTime = 17,
    RemoveAura = 18,
    SwapAll = 19,
    SwapCharm = 20,
    SwapWard = 21,
    SwapOverTime = 22,
    ModifyIncomingDamage = 23,
    ModifyIncomingDamageFlat = 24,
    MaximumIncomingDamage = 25,
    ModifyIncomingHeal = 26,
    ModifyIncomingHealFlat = 27,
    ModifyIncomingDamageType = 28,
    ModifyIncomingArmorPiercing = 29,
    ModifyOutgoingDamage = 30,
    ModifyOutgoingDamageFlat = 31,
    ModifyOutgoingHeal = 32,
    ModifyOutgoingHealFlat = 33,
    ModifyOutgoingDamageType = 34,
    ModifyOutgoingArmorPiercing = 35,
    ModifyOutgoingStealHealth = 36,
    ModifyIncomingStealHealth = 37,
    BounceNext = 38,
    BouncePrevious = 39,
    BounceBack = 40,
    BounceAll = 41,
    AbsorbDamage = 42,
    AbsorbHeal = 43,
    ModifyAccuracy = 44,
    Dispel = 45,
    Confusion = 46,
    CloakedCharm = 47,
    CloakedWard = 48,
    StunResist = 49,
    Clue = 50,
    PipConversion = 51,
    CritBoost = 52,
    CritBlock = 53,
    Polymorph = 54,
    DelayCast = 55,
    ModifyCardCloak = 56,
    ModifyCardDamage = 57,
    ModifyCardAccuracy = 58,
    ModifyCardMutation = 59,
    ModifyCardRank = 60,
    ModifyCardArmorPiercing = 61,
    SummonCreature = 62,
    TeleportPlayer = 63,
    Stun = 64,
    Dampen = 65,
    Reshuffle = 66,
    MindControl = 67,
    ModifyPips = 68,
    ModifyPowerPips = 69,
    ModifyShadowPips = 70,
    ModifyHate = 71,
    DamageOverTime = 72,
    HealOverTime = 73,
    ModifyPowerPipChance = 74,
    ModifyRank = 75,
    StunBlock = 76,
    RevealCloak = 77,
    InstantKill = 78,
    Afterlife = 79,
    DeferredDamage = 80,
    DamagePerTotalPipPower = 81,
    ModifyCardHeal = 82,
    ModifyCardCharm = 83,
    ModifyCardWard = 84,
    ModifyCardOutgoingDamage = 85,
    ModifyCardOutgoingAccuracy = 86,
    ModifyCardOutgoingHeal = 87,
    ModifyCardOutgoingArmorPiercing = 88,
    ModifyCardIncomingDamage = 89,
    ModifyCardAbsorb = 90,
    CloakedWardNoRemove = 91,
    AddCombatTriggerList = 92,
    RemoveCombatTriggerList = 93,
    BacklashDamage = 94,
    ModifyBacklash = 95,
    Intercept = 96,
    ShadowSelf = 97,
    ShadowCreature = 98,
    ModifyShadowCreatureLevel = 99,
    SelectShadowCreatureAttackTarget = 100,
    ShadowDecrementTurn = 101,
    CritBoostSchoolSpecific = 102,
    SpawnCreature = 103,
    UnPolymorph = 104,
    PowerPipConversion = 105,
    ProtectCardBeneficial = 106,
    ProtectCardHarmful = 107,
    ProtectBeneficial = 108,
    ProtectHarmful = 109,
    DivideDamage = 110,
    CollectEssence = 111,
    KillCreature = 112,
    DispelBlock = 113,
    ConfusionBlock = 114,
    ModifyPipRoundRate = 115,
    MaxHealthDamage = 116,
    Untargetable = 117,
    MakeTargetable = 118,
    ForceTargetable = 119,
    RemoveStunBlock = 120,
    ExitCombat = 121,
    SuspendPips = 122,
    ResumePips = 123,
    AutoPass = 124,
    StopAutoPass = 125,
    Vanish = 126,
    StopVanish = 127,
    MaxHealthHeal = 128,
    HealByWard = 129,
    Taunt = 130,
    Pacify = 131,
    RemoveTargetRestriction = 132,
    ConvertHangingEffect = 133,
    AddSpellToDeck = 134,
    AddSpellToHand = 135,
    ModifyIncomingDamageOverTime = 136,
    ModifyIncomingHealOverTime = 137,
    ModifyCardDamageByRank = 138,
    PushConvertedCharm = 139,
    StealConvertedCharm = 140,
    PushConvertedWard = 141,
    StealConvertedWard = 142,
    PushConvertedOverTime = 143,
    StealConvertedOverTime = 144,
    RemoveConvertedCharm = 145,
    RemoveConvertedWard = 146,
    RemoveConvertedOverTime = 147,
    ModifyOverTimeDuration = 148,
    ModifySchoolPips = 149,
    ModifyArchmastery = 150,
    ModifyShadowPipChance = 151,
}

impl EffectKind {
    /// Resolve a stored kind discriminant. Unknown ids return `None`.
    #[must_use]
    pub const fn from_raw(value: i32) -> Option<Self> {
        Some(match value {
            0 => EffectKind::Invalid,
            1 => EffectKind::Damage,
            2 => EffectKind::DamageNoCrit,
            3 => EffectKind::Heal,
            4 => EffectKind::HealPercent,
            5 => EffectKind::SetHealPercent,
            6 => EffectKind::StealHealth,
            7 => EffectKind::ReduceOverTime,
            8 => EffectKind::DetonateOverTime,
            9 => EffectKind::PushCharm,
            10 => EffectKind::StealCharm,
            11 => EffectKind::PushWard,
            12 => EffectKind::StealWard,
            13 => EffectKind::PushOverTime,
            14 => EffectKind::StealOverTime,
            15 => EffectKind::RemoveCharm,
            16 => EffectKind::RemoveWard,
            17 => EffectKind::RemoveOverTime,
            18 => EffectKind::RemoveAura,
            19 => EffectKind::SwapAll,
            20 => EffectKind::SwapCharm,
            21 => EffectKind::SwapWard,
            22 => EffectKind::SwapOverTime,
            23 => EffectKind::ModifyIncomingDamage,
            24 => EffectKind::ModifyIncomingDamageFlat,
            25 => EffectKind::MaximumIncomingDamage,
            26 => EffectKind::ModifyIncomingHeal,
            27 => EffectKind::ModifyIncomingHealFlat,
            28 => EffectKind::ModifyIncomingDamageType,
            29 => EffectKind::ModifyIncomingArmorPiercing,
            30 => EffectKind::ModifyOutgoingDamage,
            31 => EffectKind::ModifyOutgoingDamageFlat,
            32 => EffectKind::ModifyOutgoingHeal,
            33 => EffectKind::ModifyOutgoingHealFlat,
            34 => EffectKind::ModifyOutgoingDamageType,
            35 => EffectKind::ModifyOutgoingArmorPiercing,
            36 => EffectKind::ModifyOutgoingStealHealth,
            37 => EffectKind::ModifyIncomingStealHealth,
            38 => EffectKind::BounceNext,
            39 => EffectKind::BouncePrevious,
            40 => EffectKind::BounceBack,
            41 => EffectKind::BounceAll,
            42 => EffectKind::AbsorbDamage,
            43 => EffectKind::AbsorbHeal,
            44 => EffectKind::ModifyAccuracy,
            45 => EffectKind::Dispel,
            46 => EffectKind::Confusion,
            47 => EffectKind::CloakedCharm,
            48 => EffectKind::CloakedWard,
            49 => EffectKind::StunResist,
            50 => EffectKind::Clue,
            51 => EffectKind::PipConversion,
            52 => EffectKind::CritBoost,
            53 => EffectKind::CritBlock,
            54 => EffectKind::Polymorph,
            55 => EffectKind::DelayCast,
            56 => EffectKind::ModifyCardCloak,
            57 => EffectKind::ModifyCardDamage,
            58 => EffectKind::ModifyCardAccuracy,
            59 => EffectKind::ModifyCardMutation,
            60 => EffectKind::ModifyCardRank,
            61 => EffectKind::ModifyCardArmorPiercing,
            62 => EffectKind::SummonCreature,
            63 => EffectKind::TeleportPlayer,
            64 => EffectKind::Stun,
            65 => EffectKind::Dampen,
            66 => EffectKind::Reshuffle,
            67 => EffectKind::MindControl,
            68 => EffectKind::ModifyPips,
            69 => EffectKind::ModifyPowerPips,
            70 => EffectKind::ModifyShadowPips,
            71 => EffectKind::ModifyHate,
            72 => EffectKind::DamageOverTime,
            73 => EffectKind::HealOverTime,
            74 => EffectKind::ModifyPowerPipChance,
            75 => EffectKind::ModifyRank,
            76 => EffectKind::StunBlock,
            77 => EffectKind::RevealCloak,
            78 => EffectKind::InstantKill,
            79 => EffectKind::Afterlife,
            80 => EffectKind::DeferredDamage,
            81 => EffectKind::DamagePerTotalPipPower,
            82 => EffectKind::ModifyCardHeal,
            83 => EffectKind::ModifyCardCharm,
            84 => EffectKind::ModifyCardWard,
            85 => EffectKind::ModifyCardOutgoingDamage,
            86 => EffectKind::ModifyCardOutgoingAccuracy,
            87 => EffectKind::ModifyCardOutgoingHeal,
            88 => EffectKind::ModifyCardOutgoingArmorPiercing,
            89 => EffectKind::ModifyCardIncomingDamage,
            90 => EffectKind::ModifyCardAbsorb,
            91 => EffectKind::CloakedWardNoRemove,
            92 => EffectKind::AddCombatTriggerList,
            93 => EffectKind::RemoveCombatTriggerList,
            94 => EffectKind::BacklashDamage,
            95 => EffectKind::ModifyBacklash,
            96 => EffectKind::Intercept,
            97 => EffectKind::ShadowSelf,
            98 => EffectKind::ShadowCreature,
            99 => EffectKind::ModifyShadowCreatureLevel,
            100 => EffectKind::SelectShadowCreatureAttackTarget,
            101 => EffectKind::ShadowDecrementTurn,
            102 => EffectKind::CritBoostSchoolSpecific,
            103 => EffectKind::SpawnCreature,
            104 => EffectKind::UnPolymorph,
            105 => EffectKind::PowerPipConversion,
            106 => EffectKind::ProtectCardBeneficial,
            107 => EffectKind::ProtectCardHarmful,
            108 => EffectKind::ProtectBeneficial,
            109 => EffectKind::ProtectHarmful,
            110 => EffectKind::DivideDamage,
            111 => EffectKind::CollectEssence,
            112 => EffectKind::KillCreature,
            113 => EffectKind::DispelBlock,
            114 => EffectKind::ConfusionBlock,
            115 => EffectKind::ModifyPipRoundRate,
            116 => EffectKind::MaxHealthDamage,
            117 => EffectKind::Untargetable,
            118 => EffectKind::MakeTargetable,
            119 => EffectKind::ForceTargetable,
            120 => EffectKind::RemoveStunBlock,
            121 => EffectKind::ExitCombat,
            122 => EffectKind::SuspendPips,
            123 => EffectKind::ResumePips,
            124 => EffectKind::AutoPass,
            125 => EffectKind::StopAutoPass,
            126 => EffectKind::Vanish,
            127 => EffectKind::StopVanish,
            128 => EffectKind::MaxHealthHeal,
            129 => EffectKind::HealByWard,
            130 => EffectKind::Taunt,
            131 => EffectKind::Pacify,
            132 => EffectKind::RemoveTargetRestriction,
            133 => EffectKind::ConvertHangingEffect,
            134 => EffectKind::AddSpellToDeck,
            135 => EffectKind::AddSpellToHand,
            136 => EffectKind::ModifyIncomingDamageOverTime,
            137 => EffectKind::ModifyIncomingHealOverTime,
            138 => EffectKind::ModifyCardDamageByRank,
            139 => EffectKind::PushConvertedCharm,
            140 => EffectKind::StealConvertedCharm,
            141 => EffectKind::PushConvertedWard,
            142 => EffectKind::StealConvertedWard,
            143 => EffectKind::PushConvertedOverTime,
            144 => EffectKind::StealConvertedOverTime,
            145 => EffectKind::RemoveConvertedCharm,
            146 => EffectKind::RemoveConvertedWard,
            147 => EffectKind::RemoveConvertedOverTime,
            148 => EffectKind::ModifyOverTimeDuration,
            149 => EffectKind::ModifySchoolPips,
            150 => EffectKind::ModifyArchmastery,
            151 => EffectKind::ModifyShadowPipChance,
            _ => return None,
        })
    }

    /// Raw discriminant.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self as i32
    }

    /// Does this kind produce a line at all?
    ///
    /// `Invalid` marks structural wrappers. Trigger-list and hanging-effect
    /// conversion kinds only exist to hold children in the tree.
    #[must_use]
    pub const fn emits_line(self) -> bool {
        !matches!(
            self,
            EffectKind::Invalid
                | EffectKind::AddCombatTriggerList
                | EffectKind::RemoveCombatTriggerList
                | EffectKind::ConvertHangingEffect
        )
    }

    /// Kinds whose `rounds` is not a duration, so no rounds suffix is shown.
    #[must_use]
    pub const fn hides_duration(self) -> bool {
        matches!(
            self,
            EffectKind::Damage
                | EffectKind::DamageNoCrit
                | EffectKind::Stun
                | EffectKind::MindControl
                | EffectKind::DamagePerTotalPipPower
                | EffectKind::DetonateOverTime
                | EffectKind::ModifyCardDamageByRank
                | EffectKind::Clue
                | EffectKind::HealByWard
        )
    }

    /// Kinds where a `param` of -1 means "every matching effect".
    #[must_use]
    pub const fn counts_all_on_minus_one(self) -> bool {
        matches!(
            self,
            EffectKind::PushCharm
                | EffectKind::StealCharm
                | EffectKind::PushWard
                | EffectKind::StealWard
                | EffectKind::PushOverTime
                | EffectKind::StealOverTime
                | EffectKind::RemoveCharm
                | EffectKind::RemoveWard
                | EffectKind::RemoveOverTime
                | EffectKind::PushConvertedCharm
                | EffectKind::StealConvertedCharm
                | EffectKind::PushConvertedWard
                | EffectKind::StealConvertedWard
                | EffectKind::PushConvertedOverTime
                | EffectKind::StealConvertedOverTime
                | EffectKind::RemoveConvertedCharm
                | EffectKind::RemoveConvertedWard
                | EffectKind::RemoveConvertedOverTime
        )
    }
}
