//! The declarative property table.
//!
//! Identifiers are plain integer constants, not an enum: the set of
//! recognized values grows at registration time, and reserved gaps inside a
//! band (e.g. 1005-1009) stay unregistered for future growth.

use crate::{
    descriptor::{Access, Kind, LogicDescriptor, ValueType},
    error::LogicResult,
    registry::LogicRegistry,
};

/// Extended property identifiers, grouped into per-device-family bands.
pub mod ids {
    use crate::types::LogicId;

    // Contact selection & filtering (1000-1009)
    pub const CONTACT_INDEX: LogicId = 1000;
    pub const CONTACT_COUNT: LogicId = 1001;
    pub const FILTER_MODE: LogicId = 1002;
    pub const FILTER_VALUE: LogicId = 1003;
    pub const FILTERED_COUNT: LogicId = 1004;

    // Selected contact properties (1010-1029)
    pub const CONTACT_SHUTTLE_TYPE: LogicId = 1010;
    pub const CONTACT_LIFETIME: LogicId = 1011;
    pub const CONTACT_DEGREE_OFFSET: LogicId = 1012;
    pub const CONTACT_RESOLVED: LogicId = 1013;
    pub const CONTACT_CONTACTED: LogicId = 1014;
    pub const CONTACT_RESOLUTION_PROGRESS: LogicId = 1015;
    pub const CONTACT_MIN_WATTS_RESOLVE: LogicId = 1016;
    pub const CONTACT_MIN_WATTS_CONTACT: LogicId = 1017;
    pub const CONTACT_SECONDS_TO_CONTACT: LogicId = 1018;
    pub const CONTACT_TRADER_HASH: LogicId = 1019;
    pub const CONTACT_REFERENCE_ID: LogicId = 1020;

    // Dish state (1030-1039)
    pub const DISH_WATTAGE_ON_CONTACT: LogicId = 1030;
    pub const DISH_IS_INTERROGATING: LogicId = 1031;
    pub const DISH_INTERROGATING_ID: LogicId = 1032;

    // Daylight sensor / realtime data (1110-1119)
    pub const TIME_OF_DAY: LogicId = 1110;
    pub const IS_ECLIPSE: LogicId = 1111;
    pub const ECLIPSE_RATIO: LogicId = 1112;
    pub const DAYS_PAST: LogicId = 1113;
    pub const DAY_LENGTH_SECONDS: LogicId = 1114;
    pub const LATITUDE: LogicId = 1115;
    pub const LONGITUDE: LogicId = 1116;
    pub const WEATHER_SOLAR_RATIO: LogicId = 1117;

    // Wind turbine (1120-1129)
    pub const WIND_SPEED: LogicId = 1120;
    pub const MAX_POWER: LogicId = 1121;
    pub const TURBINE_SPEED: LogicId = 1122;
    pub const ATMOSPHERIC_PRESSURE: LogicId = 1123;

    // Battery (1210-1219)
    pub const POWER_DELTA: LogicId = 1210;
    pub const BATTERY_IS_SUBMERGED: LogicId = 1211;
    pub const INPUT_SUBMERGED_TICKS: LogicId = 1212;
    pub const OUTPUT_SUBMERGED_TICKS: LogicId = 1213;
    pub const BATTERY_IS_EMPTY: LogicId = 1214;
    pub const BATTERY_IS_CHARGED: LogicId = 1215;

    // Solar panel (1220-1229)
    pub const SOLAR_VISIBILITY: LogicId = 1220;
    pub const SOLAR_DAMAGE_RATIO: LogicId = 1221;
    pub const SOLAR_DAMAGE_TOTAL: LogicId = 1222;
    pub const SOLAR_HEALTH: LogicId = 1223;
    pub const SOLAR_EFFICIENCY: LogicId = 1224;
    pub const SOLAR_IS_OPERABLE: LogicId = 1225;
    pub const SOLAR_IS_BROKEN: LogicId = 1226;
    pub const SOLAR_MOVEMENT_SPEED_H: LogicId = 1227;
    pub const SOLAR_MOVEMENT_SPEED_V: LogicId = 1228;

    // Filtration machine state (1400-1409)
    pub const FILTER_SLOT_INDEX: LogicId = 1400;
    pub const FILTER_SLOT_COUNT: LogicId = 1401;
    pub const HAS_EMPTY_FILTER: LogicId = 1402;
    pub const IS_FULLY_CONNECTED: LogicId = 1403;
    pub const FILTER_POWER_USED: LogicId = 1404;
    pub const FILTRATION_PROCESSED_MOLES: LogicId = 1405;
    pub const OUTPUT_PRESSURE_LIMIT: LogicId = 1406;
    pub const INPUT_PRESSURE_LIMIT: LogicId = 1407;

    // Per-filter properties, selected by FilterSlotIndex (1410-1419)
    pub const FILTER_QUANTITY: LogicId = 1410;
    pub const FILTER_IS_LOW: LogicId = 1411;
    pub const FILTER_IS_EMPTY: LogicId = 1412;
    pub const FILTER_TYPE_HASH: LogicId = 1413;
    pub const FILTER_LIFE: LogicId = 1414;
    pub const FILTER_USED_TICKS: LogicId = 1415;
    pub const FILTER_MAX_TICKS: LogicId = 1416;
}

/// Build the full registry. Called once at startup; building twice yields
/// byte-identical contents.
pub fn build_registry() -> LogicResult<LogicRegistry> {
    use ids::*;
    use Access::{Read, ReadWrite};
    use Kind::{Added, Revealed};
    use ValueType::{Bool, Float, Int, Long};

    let mut reg = LogicRegistry::new();
    let mut add = |d: LogicDescriptor| reg.register(d);

    // Contact selection & filtering
    add(LogicDescriptor::new(
        CONTACT_INDEX,
        "ContactIndex",
        "Select contact by index (0-based)",
        Int,
        ReadWrite,
        Added,
        "ContactSelection",
    ))?;
    add(LogicDescriptor::new(
        CONTACT_COUNT,
        "ContactCount",
        "Total visible contacts",
        Int,
        Read,
        Revealed,
        "ContactSelection",
    ))?;
    add(LogicDescriptor::new(
        FILTER_MODE,
        "FilterMode",
        "Filter type: 0=All, 1=ShuttleType, 2=Resolved, 3=Unresolved, 4=Contacted, 5=NotContacted",
        Int,
        ReadWrite,
        Added,
        "ContactSelection",
    ))?;
    add(LogicDescriptor::new(
        FILTER_VALUE,
        "FilterValue",
        "Filter parameter value (e.g., ShuttleType when FilterMode=1)",
        Int,
        ReadWrite,
        Added,
        "ContactSelection",
    ))?;
    add(LogicDescriptor::new(
        FILTERED_COUNT,
        "FilteredCount",
        "Count of contacts matching current filter",
        Int,
        Read,
        Added,
        "ContactSelection",
    ))?;

    // Selected contact properties
    add(LogicDescriptor::new(
        CONTACT_SHUTTLE_TYPE,
        "ContactShuttleType",
        "ShuttleType enum: 0=None, 1=Small, 2=SmallGas, 3=Medium, 4=MediumGas, 5=Large, 6=LargeGas, 7=MediumPlane, 8=LargePlane",
        Int,
        Read,
        Revealed,
        "ContactProperties",
    ))?;
    add(LogicDescriptor::new(
        CONTACT_LIFETIME,
        "ContactLifetime",
        "Seconds until contact leaves range",
        Float,
        Read,
        Revealed,
        "ContactProperties",
    ))?;
    add(LogicDescriptor::new(
        CONTACT_DEGREE_OFFSET,
        "ContactDegreeOffset",
        "Alignment angle in degrees (lower = better aligned)",
        Float,
        Read,
        Revealed,
        "ContactProperties",
    ))?;
    add(LogicDescriptor::new(
        CONTACT_RESOLVED,
        "ContactResolved",
        "1 if contact is resolved, 0 if not",
        Bool,
        Read,
        Revealed,
        "ContactProperties",
    ))?;
    add(LogicDescriptor::new(
        CONTACT_CONTACTED,
        "ContactContacted",
        "1 if trader has been contacted, 0 if not",
        Bool,
        Read,
        Revealed,
        "ContactProperties",
    ))?;
    add(LogicDescriptor::new(
        CONTACT_RESOLUTION_PROGRESS,
        "ContactResolutionProgress",
        "Resolution progress 0.0-1.0",
        Float,
        Read,
        Revealed,
        "ContactProperties",
    ))?;
    add(LogicDescriptor::new(
        CONTACT_MIN_WATTS_RESOLVE,
        "ContactMinWattsResolve",
        "Minimum watts required to resolve this contact",
        Float,
        Read,
        Revealed,
        "ContactProperties",
    ))?;
    add(LogicDescriptor::new(
        CONTACT_MIN_WATTS_CONTACT,
        "ContactMinWattsContact",
        "Minimum watts required to contact this trader",
        Float,
        Read,
        Revealed,
        "ContactProperties",
    ))?;
    add(LogicDescriptor::new(
        CONTACT_SECONDS_TO_CONTACT,
        "ContactSecondsToContact",
        "Seconds required to establish contact",
        Float,
        Read,
        Revealed,
        "ContactProperties",
    ))?;
    add(LogicDescriptor::new(
        CONTACT_TRADER_HASH,
        "ContactTraderHash",
        "Trader type hash (same as the host's contact type id)",
        Int,
        Read,
        Revealed,
        "ContactProperties",
    ))?;
    add(LogicDescriptor::new(
        CONTACT_REFERENCE_ID,
        "ContactReferenceId",
        "Unique reference ID of contact",
        Long,
        Read,
        Revealed,
        "ContactProperties",
    ))?;

    // Dish state
    add(LogicDescriptor::new(
        DISH_WATTAGE_ON_CONTACT,
        "DishWattageOnContact",
        "Actual watts reaching selected contact",
        Float,
        Read,
        Revealed,
        "DishState",
    ))?;
    add(LogicDescriptor::new(
        DISH_IS_INTERROGATING,
        "DishIsInterrogating",
        "1 if dish is currently interrogating a contact",
        Bool,
        Read,
        Revealed,
        "DishState",
    ))?;
    add(LogicDescriptor::new(
        DISH_INTERROGATING_ID,
        "DishInterrogatingId",
        "ReferenceId of contact being interrogated, 0 if none",
        Long,
        Read,
        Revealed,
        "DishState",
    ))?;

    // Daylight sensor / realtime data
    add(LogicDescriptor::new(
        TIME_OF_DAY,
        "TimeOfDay",
        "Time of day 0-1 (0=sunrise, 0.25=noon, 0.5=sunset, 0.75=midnight)",
        Float,
        Read,
        Revealed,
        "RealtimeData",
    ))?;
    add(LogicDescriptor::new(
        IS_ECLIPSE,
        "IsEclipse",
        "1 if eclipse is occurring, 0 if not",
        Bool,
        Read,
        Revealed,
        "RealtimeData",
    ))?;
    add(LogicDescriptor::new(
        ECLIPSE_RATIO,
        "EclipseRatio",
        "Eclipse intensity 0.0-1.0 (0=no eclipse, 1=full eclipse)",
        Float,
        Read,
        Revealed,
        "RealtimeData",
    ))?;
    add(LogicDescriptor::new(
        DAYS_PAST,
        "DaysPast",
        "Number of days since world creation",
        Int,
        Read,
        Revealed,
        "RealtimeData",
    ))?;
    add(LogicDescriptor::new(
        DAY_LENGTH_SECONDS,
        "DayLengthSeconds",
        "Length of a day in seconds",
        Int,
        Read,
        Revealed,
        "RealtimeData",
    ))?;
    add(LogicDescriptor::new(
        LATITUDE,
        "Latitude",
        "World latitude in degrees",
        Float,
        Read,
        Revealed,
        "RealtimeData",
    ))?;
    add(LogicDescriptor::new(
        LONGITUDE,
        "Longitude",
        "World longitude in degrees",
        Float,
        Read,
        Revealed,
        "RealtimeData",
    ))?;
    add(LogicDescriptor::new(
        WEATHER_SOLAR_RATIO,
        "WeatherSolarRatio",
        "Weather solar ratio 0-1 (1=full sun, lower during storms)",
        Float,
        Read,
        Revealed,
        "RealtimeData",
    ))?;

    // Wind turbine
    add(LogicDescriptor::new(
        WIND_SPEED,
        "WindSpeed",
        "Current global wind strength 0-1",
        Float,
        Read,
        Revealed,
        "WindTurbine",
    ))?;
    add(LogicDescriptor::new(
        MAX_POWER,
        "MaxPower",
        "Current max power output (storm-aware)",
        Float,
        Read,
        Revealed,
        "WindTurbine",
    ))?;
    add(LogicDescriptor::new(
        TURBINE_SPEED,
        "TurbineSpeed",
        "Current turbine blade rotation speed 0-1",
        Float,
        Read,
        Revealed,
        "WindTurbine",
    ))?;
    add(LogicDescriptor::new(
        ATMOSPHERIC_PRESSURE,
        "AtmosphericPressure",
        "Clamped atmospheric pressure in kPa",
        Float,
        Read,
        Revealed,
        "WindTurbine",
    ))?;

    // Battery
    add(LogicDescriptor::new(
        POWER_DELTA,
        "PowerDelta",
        "Power deficit (PowerStored - PowerMaximum). Negative when not full",
        Float,
        Read,
        Revealed,
        "Battery",
    ))?;
    add(LogicDescriptor::new(
        BATTERY_IS_SUBMERGED,
        "BatteryIsSubmerged",
        "1 if battery is submerged in liquid (short circuit risk), 0 if not",
        Bool,
        Read,
        Revealed,
        "Battery",
    ))?;
    add(LogicDescriptor::new(
        INPUT_SUBMERGED_TICKS,
        "InputSubmergedTicks",
        "Number of ticks input connection has been submerged",
        Int,
        Read,
        Revealed,
        "Battery",
    ))?;
    add(LogicDescriptor::new(
        OUTPUT_SUBMERGED_TICKS,
        "OutputSubmergedTicks",
        "Number of ticks output connection has been submerged",
        Int,
        Read,
        Revealed,
        "Battery",
    ))?;
    add(LogicDescriptor::new(
        BATTERY_IS_EMPTY,
        "BatteryIsEmpty",
        "1 if battery is empty (Mode == 0), 0 if not",
        Bool,
        Read,
        Revealed,
        "Battery",
    ))?;
    add(LogicDescriptor::new(
        BATTERY_IS_CHARGED,
        "BatteryIsCharged",
        "1 if battery is fully charged (Mode == 6), 0 if not",
        Bool,
        Read,
        Revealed,
        "Battery",
    ))?;

    // Solar panel
    add(LogicDescriptor::new(
        SOLAR_VISIBILITY,
        "SolarVisibility",
        "Sun visibility factor 0-1 (affected by obstructions)",
        Float,
        Read,
        Revealed,
        "SolarPanel",
    ))?;
    add(LogicDescriptor::new(
        SOLAR_DAMAGE_RATIO,
        "SolarDamageRatio",
        "Damage ratio 0-1 (0=undamaged, 1=fully damaged)",
        Float,
        Read,
        Revealed,
        "SolarPanel",
    ))?;
    add(LogicDescriptor::new(
        SOLAR_DAMAGE_TOTAL,
        "SolarDamageTotal",
        "Total damage points accumulated",
        Float,
        Read,
        Revealed,
        "SolarPanel",
    ))?;
    add(LogicDescriptor::new(
        SOLAR_HEALTH,
        "SolarHealth",
        "Current health as percentage 0-100",
        Int,
        Read,
        Revealed,
        "SolarPanel",
    ))?;
    add(LogicDescriptor::new(
        SOLAR_EFFICIENCY,
        "SolarEfficiency",
        "Current efficiency as percentage 0-100 (includes damage)",
        Int,
        Read,
        Revealed,
        "SolarPanel",
    ))?;
    add(LogicDescriptor::new(
        SOLAR_IS_OPERABLE,
        "SolarIsOperable",
        "1 if panel is operable, 0 if not",
        Bool,
        Read,
        Revealed,
        "SolarPanel",
    ))?;
    add(LogicDescriptor::new(
        SOLAR_IS_BROKEN,
        "SolarIsBroken",
        "1 if panel is broken, 0 if not",
        Bool,
        Read,
        Revealed,
        "SolarPanel",
    ))?;
    add(LogicDescriptor::new(
        SOLAR_MOVEMENT_SPEED_H,
        "SolarMovementSpeedH",
        "Horizontal rotation speed in degrees/sec",
        Float,
        Read,
        Revealed,
        "SolarPanel",
    ))?;
    add(LogicDescriptor::new(
        SOLAR_MOVEMENT_SPEED_V,
        "SolarMovementSpeedV",
        "Vertical rotation speed in degrees/sec",
        Float,
        Read,
        Revealed,
        "SolarPanel",
    ))?;

    // Filtration machine state
    add(LogicDescriptor::new(
        FILTER_SLOT_INDEX,
        "FilterSlotIndex",
        "Select filter slot by index (0-based)",
        Int,
        ReadWrite,
        Added,
        "Filtration",
    ))?;
    add(LogicDescriptor::new(
        FILTER_SLOT_COUNT,
        "FilterSlotCount",
        "Total number of gas filter slots",
        Int,
        Read,
        Revealed,
        "Filtration",
    ))?;
    add(LogicDescriptor::new(
        HAS_EMPTY_FILTER,
        "HasEmptyFilter",
        "1 if any filter is empty, 0 if all have charge",
        Bool,
        Read,
        Revealed,
        "Filtration",
    ))?;
    add(LogicDescriptor::new(
        IS_FULLY_CONNECTED,
        "IsFullyConnected",
        "1 if all pipe networks are connected, 0 if not",
        Bool,
        Read,
        Revealed,
        "Filtration",
    ))?;
    add(LogicDescriptor::new(
        FILTER_POWER_USED,
        "FilterPowerUsed",
        "Power consumed during filtration this tick",
        Float,
        Read,
        Revealed,
        "Filtration",
    ))?;
    add(LogicDescriptor::new(
        FILTRATION_PROCESSED_MOLES,
        "FiltrationProcessedMoles",
        "Moles processed during this atmospheric tick",
        Float,
        Read,
        Revealed,
        "Filtration",
    ))?;
    add(LogicDescriptor::new(
        OUTPUT_PRESSURE_LIMIT,
        "OutputPressureLimit",
        "Maximum output pressure limit in kPa. 0 = unlimited",
        Float,
        ReadWrite,
        Added,
        "Filtration",
    ))?;
    add(LogicDescriptor::new(
        INPUT_PRESSURE_LIMIT,
        "InputPressureLimit",
        "Minimum input pressure required in kPa. 0 = no minimum",
        Float,
        ReadWrite,
        Added,
        "Filtration",
    ))?;

    // Per-filter properties
    add(LogicDescriptor::new(
        FILTER_QUANTITY,
        "FilterQuantity",
        "Filter charge remaining 0.0-1.0",
        Float,
        Read,
        Revealed,
        "Filtration",
    ))?;
    add(LogicDescriptor::new(
        FILTER_IS_LOW,
        "FilterIsLow",
        "1 if filter charge is low (<=5%), 0 if not",
        Bool,
        Read,
        Revealed,
        "Filtration",
    ))?;
    add(LogicDescriptor::new(
        FILTER_IS_EMPTY,
        "FilterIsEmpty",
        "1 if filter is completely empty, 0 if not",
        Bool,
        Read,
        Revealed,
        "Filtration",
    ))?;
    add(LogicDescriptor::new(
        FILTER_TYPE_HASH,
        "FilterTypeHash",
        "Gas type hash of the filtered gas",
        Int,
        Read,
        Revealed,
        "Filtration",
    ))?;
    add(LogicDescriptor::new(
        FILTER_LIFE,
        "FilterLife",
        "Filter life tier: 0=Normal, 1=Medium, 2=Large, 3=SuperHeavy",
        Int,
        Read,
        Revealed,
        "Filtration",
    ))?;
    add(LogicDescriptor::new(
        FILTER_USED_TICKS,
        "FilterUsedTicks",
        "Ticks used since last degradation",
        Int,
        Read,
        Revealed,
        "Filtration",
    ))?;
    add(LogicDescriptor::new(
        FILTER_MAX_TICKS,
        "FilterMaxTicks",
        "Max ticks before degradation based on filter life",
        Int,
        Read,
        Revealed,
        "Filtration",
    ))?;

    Ok(reg)
}
