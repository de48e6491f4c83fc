//! Static unit-type id catalog.
//!
//! Used to size the categorical `unit_type` feature layer: its scale is
//! `max(UNIT_TYPES) + 1`. Reproduced from the engine's unit data; grouped
//! by race as shipped.

/// Every known unit-type id, grouped by race.
#[rustfmt::skip]
pub const UNIT_TYPES: &[u32] = &[
    // Terran
    29, // Armory
    31, // AutoTurret
    55, // Banshee
    21, // Barracks
    46, // BarracksFlying
    38, // BarracksReactor
    37, // BarracksTechLab
    57, // Battlecruiser
    24, // Bunker
    18, // CommandCenter
    36, // CommandCenterFlying
    692, // Cyclone
    22, // EngineeringBay
    27, // Factory
    43, // FactoryFlying
    40, // FactoryReactor
    39, // FactoryTechLab
    30, // FusionCore
    50, // Ghost
    26, // GhostAcademy
    53, // Hellion
    484, // HellionTank
    830, // KD8Charge
    689, // Liberator
    734, // LiberatorAG
    268, // MULE
    51, // Marauder
    48, // Marine
    54, // Medivac
    23, // MissileTurret
    58, // Nuke
    132, // OrbitalCommand
    134, // OrbitalCommandFlying
    130, // PlanetaryFortress
    11, // PointDefenseDrone
    56, // Raven
    6, // Reactor
    49, // Reaper
    20, // Refinery
    45, // SCV
    25, // SensorTower
    33, // SiegeTank
    32, // SiegeTankSieged
    28, // Starport
    44, // StarportFlying
    42, // StarportReactor
    41, // StarportTechLab
    19, // SupplyDepot
    47, // SupplyDepotLowered
    5, // TechLab
    52, // Thor
    691, // ThorAP
    34, // VikingAssault
    35, // VikingFighter
    498, // WidowMine
    500, // WidowMineBurrowed
    // Zerg
    9, // Baneling
    115, // BanelingBurrowed
    8, // BanelingCocoon
    96, // BanelingNest
    114, // BroodLord
    113, // BroodLordCocoon
    289, // Broodling
    12, // Changeling
    15, // ChangelingMarine
    14, // ChangelingMarineShield
    13, // ChangelingZealot
    17, // ChangelingZergling
    16, // ChangelingZerglingWings
    112, // Corruptor
    87, // CreepTumor
    137, // CreepTumorBurrowed
    138, // CreepTumorQueen
    104, // Drone
    116, // DroneBurrowed
    103, // Egg
    90, // EvolutionChamber
    88, // Extractor
    102, // GreaterSpire
    86, // Hatchery
    101, // Hive
    107, // Hydralisk
    117, // HydraliskBurrowed
    91, // HydraliskDen
    94, // InfestationPit
    150, // InfestedTerransEgg
    111, // Infestor
    127, // InfestorBurrowed
    7, // InfestorTerran
    100, // Lair
    151, // Larva
    489, // LocustMP
    693, // LocustMPFlying
    504, // LurkerDenMP
    502, // LurkerMP
    503, // LurkerMPBurrowed
    501, // LurkerMPEgg
    108, // Mutalisk
    142, // NydusCanal
    95, // NydusNetwork
    106, // Overlord
    128, // OverlordCocoon
    893, // OverlordTransport
    129, // Overseer
    824, // ParasiticBombDummy
    126, // Queen
    125, // QueenBurrowed
    688, // Ravager
    687, // RavagerCocoon
    110, // Roach
    118, // RoachBurrowed
    97, // RoachWarren
    89, // SpawningPool
    98, // SpineCrawler
    139, // SpineCrawlerUprooted
    92, // Spire
    99, // SporeCrawler
    140, // SporeCrawlerUprooted
    493, // SwarmHostBurrowedMP
    494, // SwarmHostMP
    892, // TransportOverlordCocoon
    109, // Ultralisk
    93, // UltraliskCavern
    499, // Viper
    105, // Zergling
    119, // ZerglingBurrowed
    // Protoss
    311, // Adept
    801, // AdeptPhaseShift
    141, // Archon
    61, // Assimilator
    79, // Carrier
    4, // Colossus
    72, // CyberneticsCore
    69, // DarkShrine
    76, // DarkTemplar
    694, // Disruptor
    733, // DisruptorPhased
    64, // FleetBeacon
    63, // Forge
    62, // Gateway
    75, // HighTemplar
    83, // Immortal
    85, // Interceptor
    10, // Mothership
    488, // MothershipCore
    59, // Nexus
    82, // Observer
    495, // Oracle
    732, // OracleStasisTrap
    78, // Phoenix
    66, // PhotonCannon
    84, // Probe
    60, // Pylon
    894, // PylonOvercharged
    70, // RoboticsBay
    71, // RoboticsFacility
    77, // Sentry
    74, // Stalker
    67, // Stargate
    496, // Tempest
    68, // TemplarArchive
    65, // TwilightCouncil
    80, // VoidRay
    133, // WarpGate
    81, // WarpPrism
    136, // WarpPrismPhasing
    73, // Zealot
    // Neutral
    886, // BattleStationMineralField
    887, // BattleStationMineralField750
    490, // CollapsibleRockTowerDebris
    588, // CollapsibleRockTowerDiagonal
    561, // CollapsibleRockTowerPushUnit
    485, // CollapsibleTerranTowerDebris
    589, // CollapsibleTerranTowerDiagonal
    562, // CollapsibleTerranTowerPushUnit
    559, // CollapsibleTerranTowerPushUnitRampLeft
    560, // CollapsibleTerranTowerPushUnitRampRight
    590, // CollapsibleTerranTowerRampLeft
    591, // CollapsibleTerranTowerRampRight
    486, // DebrisRampLeft
    487, // DebrisRampRight
    365, // DestructibleDebris6x6
    377, // DestructibleDebrisRampDiagonalHugeBLUR
    376, // DestructibleDebrisRampDiagonalHugeULBR
    371, // DestructibleRock6x6
    641, // DestructibleRockEx1DiagonalHugeBLUR
    135, // ForceField
    324, // KarakFemale
    665, // LabMineralField
    666, // LabMineralField750
    341, // MineralField
    483, // MineralField750
    608, // ProtossVespeneGeyser
    884, // PurifierMineralField
    885, // PurifierMineralField750
    796, // PurifierRichMineralField
    797, // PurifierRichMineralField750
    880, // PurifierVespeneGeyser
    146, // RichMineralField
    147, // RichMineralField750
    344, // RichVespeneGeyser
    335, // Scantipede
    881, // ShakurasVespeneGeyser
    343, // SpacePlatformGeyser
    473, // UnbuildableBricksDestructible
    474, // UnbuildablePlatesDestructible
    330, // UtilityBot
    342, // VespeneGeyser
    149, // XelNagaTower
];

/// Scale of the categorical `unit_type` layer: one past the largest id.
pub fn unit_type_scale() -> u32 {
    UNIT_TYPES.iter().copied().max().unwrap_or(0) + 1
}
