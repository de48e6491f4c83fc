//! Static function tables for the surface and raw action interfaces.
//!
//! These are catalogs, not code: every entry reproduces the engine's
//! ability/function numbering exactly as shipped. Edit only to track an
//! engine data update, and keep ids dense; the catalog builder rejects
//! holes.

use crate::ftype::FunctionType;
use crate::spec::{FunctionDef, UiAvailability};

/// Function definitions for the surface (screen/minimap) interface.
///
/// Entries appear in the order the catalog was assembled upstream; ids are
/// dense on `0..SURFACE_FUNCTIONS.len()` but not sorted here. The builder
/// sorts by id before exposing the array-indexed view.
#[rustfmt::skip]
pub const SURFACE_FUNCTIONS: &[FunctionDef] = &[
    FunctionDef { id: 0, name: "no_op", ftype: FunctionType::NoOp, ability_id: 0, general_id: 0, avail: Some(UiAvailability::Always) },
    FunctionDef { id: 1, name: "move_camera", ftype: FunctionType::MoveCamera, ability_id: 0, general_id: 0, avail: Some(UiAvailability::Always) },
    FunctionDef { id: 2, name: "select_point", ftype: FunctionType::SelectPoint, ability_id: 0, general_id: 0, avail: Some(UiAvailability::Always) },
    FunctionDef { id: 3, name: "select_rect", ftype: FunctionType::SelectRect, ability_id: 0, general_id: 0, avail: Some(UiAvailability::Always) },
    FunctionDef { id: 4, name: "select_control_group", ftype: FunctionType::ControlGroup, ability_id: 0, general_id: 0, avail: Some(UiAvailability::Always) },
    FunctionDef { id: 5, name: "select_unit", ftype: FunctionType::SelectUnit, ability_id: 0, general_id: 0, avail: Some(UiAvailability::HasMultiSelect) },
    FunctionDef { id: 6, name: "select_idle_worker", ftype: FunctionType::SelectIdleWorker, ability_id: 0, general_id: 0, avail: Some(UiAvailability::IdleWorkers) },
    FunctionDef { id: 7, name: "select_army", ftype: FunctionType::SelectArmy, ability_id: 0, general_id: 0, avail: Some(UiAvailability::Army) },
    FunctionDef { id: 8, name: "select_warp_gates", ftype: FunctionType::SelectWarpGates, ability_id: 0, general_id: 0, avail: Some(UiAvailability::WarpGates) },
    FunctionDef { id: 9, name: "select_larva", ftype: FunctionType::SelectLarva, ability_id: 0, general_id: 0, avail: Some(UiAvailability::Larva) },
    FunctionDef { id: 10, name: "unload", ftype: FunctionType::Unload, ability_id: 0, general_id: 0, avail: Some(UiAvailability::HasCargo) },
    FunctionDef { id: 11, name: "build_queue", ftype: FunctionType::BuildQueue, ability_id: 0, general_id: 0, avail: Some(UiAvailability::HasProduction) },
    FunctionDef { id: 12, name: "Attack_screen", ftype: FunctionType::CmdScreen, ability_id: 3674, general_id: 0, avail: None },
    FunctionDef { id: 13, name: "Attack_minimap", ftype: FunctionType::CmdMinimap, ability_id: 3674, general_id: 0, avail: None },
    FunctionDef { id: 14, name: "Attack_Attack_screen", ftype: FunctionType::CmdScreen, ability_id: 23, general_id: 3674, avail: None },
    FunctionDef { id: 15, name: "Attack_Attack_minimap", ftype: FunctionType::CmdMinimap, ability_id: 23, general_id: 3674, avail: None },
    FunctionDef { id: 16, name: "Attack_AttackBuilding_screen", ftype: FunctionType::CmdScreen, ability_id: 2048, general_id: 3674, avail: None },
    FunctionDef { id: 17, name: "Attack_AttackBuilding_minimap", ftype: FunctionType::CmdMinimap, ability_id: 2048, general_id: 3674, avail: None },
    FunctionDef { id: 555, name: "Attack_Battlecruiser_screen", ftype: FunctionType::CmdScreen, ability_id: 3771, general_id: 3674, avail: None },
    FunctionDef { id: 556, name: "Attack_Battlecruiser_minimap", ftype: FunctionType::CmdMinimap, ability_id: 3771, general_id: 3674, avail: None },
    FunctionDef { id: 18, name: "Attack_Redirect_screen", ftype: FunctionType::CmdScreen, ability_id: 1682, general_id: 3674, avail: None },
    FunctionDef { id: 19, name: "Scan_Move_screen", ftype: FunctionType::CmdScreen, ability_id: 19, general_id: 3674, avail: None },
    FunctionDef { id: 20, name: "Scan_Move_minimap", ftype: FunctionType::CmdMinimap, ability_id: 19, general_id: 3674, avail: None },
    FunctionDef { id: 21, name: "Behavior_BuildingAttackOff_quick", ftype: FunctionType::CmdQuick, ability_id: 2082, general_id: 0, avail: None },
    FunctionDef { id: 22, name: "Behavior_BuildingAttackOn_quick", ftype: FunctionType::CmdQuick, ability_id: 2081, general_id: 0, avail: None },
    FunctionDef { id: 23, name: "Behavior_CloakOff_quick", ftype: FunctionType::CmdQuick, ability_id: 3677, general_id: 0, avail: None },
    FunctionDef { id: 24, name: "Behavior_CloakOff_Banshee_quick", ftype: FunctionType::CmdQuick, ability_id: 393, general_id: 3677, avail: None },
    FunctionDef { id: 25, name: "Behavior_CloakOff_Ghost_quick", ftype: FunctionType::CmdQuick, ability_id: 383, general_id: 3677, avail: None },
    FunctionDef { id: 26, name: "Behavior_CloakOn_quick", ftype: FunctionType::CmdQuick, ability_id: 3676, general_id: 0, avail: None },
    FunctionDef { id: 27, name: "Behavior_CloakOn_Banshee_quick", ftype: FunctionType::CmdQuick, ability_id: 392, general_id: 3676, avail: None },
    FunctionDef { id: 28, name: "Behavior_CloakOn_Ghost_quick", ftype: FunctionType::CmdQuick, ability_id: 382, general_id: 3676, avail: None },
    FunctionDef { id: 29, name: "Behavior_GenerateCreepOff_quick", ftype: FunctionType::CmdQuick, ability_id: 1693, general_id: 0, avail: None },
    FunctionDef { id: 30, name: "Behavior_GenerateCreepOn_quick", ftype: FunctionType::CmdQuick, ability_id: 1692, general_id: 0, avail: None },
    FunctionDef { id: 31, name: "Behavior_HoldFireOff_quick", ftype: FunctionType::CmdQuick, ability_id: 3689, general_id: 0, avail: None },
    FunctionDef { id: 32, name: "Behavior_HoldFireOff_Ghost_quick", ftype: FunctionType::CmdQuick, ability_id: 38, general_id: 3689, avail: None },
    FunctionDef { id: 33, name: "Behavior_HoldFireOff_Lurker_quick", ftype: FunctionType::CmdQuick, ability_id: 2552, general_id: 3689, avail: None },
    FunctionDef { id: 34, name: "Behavior_HoldFireOn_quick", ftype: FunctionType::CmdQuick, ability_id: 3688, general_id: 0, avail: None },
    FunctionDef { id: 35, name: "Behavior_HoldFireOn_Ghost_quick", ftype: FunctionType::CmdQuick, ability_id: 36, general_id: 3688, avail: None },
    FunctionDef { id: 36, name: "Behavior_HoldFireOn_Lurker_quick", ftype: FunctionType::CmdQuick, ability_id: 2550, general_id: 3688, avail: None },
    FunctionDef { id: 37, name: "Behavior_PulsarBeamOff_quick", ftype: FunctionType::CmdQuick, ability_id: 2376, general_id: 0, avail: None },
    FunctionDef { id: 38, name: "Behavior_PulsarBeamOn_quick", ftype: FunctionType::CmdQuick, ability_id: 2375, general_id: 0, avail: None },
    FunctionDef { id: 39, name: "Build_Armory_screen", ftype: FunctionType::CmdScreen, ability_id: 331, general_id: 0, avail: None },
    FunctionDef { id: 40, name: "Build_Assimilator_screen", ftype: FunctionType::CmdScreen, ability_id: 882, general_id: 0, avail: None },
    FunctionDef { id: 41, name: "Build_BanelingNest_screen", ftype: FunctionType::CmdScreen, ability_id: 1162, general_id: 0, avail: None },
    FunctionDef { id: 42, name: "Build_Barracks_screen", ftype: FunctionType::CmdScreen, ability_id: 321, general_id: 0, avail: None },
    FunctionDef { id: 43, name: "Build_Bunker_screen", ftype: FunctionType::CmdScreen, ability_id: 324, general_id: 0, avail: None },
    FunctionDef { id: 44, name: "Build_CommandCenter_screen", ftype: FunctionType::CmdScreen, ability_id: 318, general_id: 0, avail: None },
    FunctionDef { id: 45, name: "Build_CreepTumor_screen", ftype: FunctionType::CmdScreen, ability_id: 3691, general_id: 0, avail: None },
    FunctionDef { id: 46, name: "Build_CreepTumor_Queen_screen", ftype: FunctionType::CmdScreen, ability_id: 1694, general_id: 3691, avail: None },
    FunctionDef { id: 47, name: "Build_CreepTumor_Tumor_screen", ftype: FunctionType::CmdScreen, ability_id: 1733, general_id: 3691, avail: None },
    FunctionDef { id: 48, name: "Build_CyberneticsCore_screen", ftype: FunctionType::CmdScreen, ability_id: 894, general_id: 0, avail: None },
    FunctionDef { id: 49, name: "Build_DarkShrine_screen", ftype: FunctionType::CmdScreen, ability_id: 891, general_id: 0, avail: None },
    FunctionDef { id: 50, name: "Build_EngineeringBay_screen", ftype: FunctionType::CmdScreen, ability_id: 322, general_id: 0, avail: None },
    FunctionDef { id: 51, name: "Build_EvolutionChamber_screen", ftype: FunctionType::CmdScreen, ability_id: 1156, general_id: 0, avail: None },
    FunctionDef { id: 52, name: "Build_Extractor_screen", ftype: FunctionType::CmdScreen, ability_id: 1154, general_id: 0, avail: None },
    FunctionDef { id: 53, name: "Build_Factory_screen", ftype: FunctionType::CmdScreen, ability_id: 328, general_id: 0, avail: None },
    FunctionDef { id: 54, name: "Build_FleetBeacon_screen", ftype: FunctionType::CmdScreen, ability_id: 885, general_id: 0, avail: None },
    FunctionDef { id: 55, name: "Build_Forge_screen", ftype: FunctionType::CmdScreen, ability_id: 884, general_id: 0, avail: None },
    FunctionDef { id: 56, name: "Build_FusionCore_screen", ftype: FunctionType::CmdScreen, ability_id: 333, general_id: 0, avail: None },
    FunctionDef { id: 57, name: "Build_Gateway_screen", ftype: FunctionType::CmdScreen, ability_id: 883, general_id: 0, avail: None },
    FunctionDef { id: 58, name: "Build_GhostAcademy_screen", ftype: FunctionType::CmdScreen, ability_id: 327, general_id: 0, avail: None },
    FunctionDef { id: 59, name: "Build_Hatchery_screen", ftype: FunctionType::CmdScreen, ability_id: 1152, general_id: 0, avail: None },
    FunctionDef { id: 60, name: "Build_HydraliskDen_screen", ftype: FunctionType::CmdScreen, ability_id: 1157, general_id: 0, avail: None },
    FunctionDef { id: 61, name: "Build_InfestationPit_screen", ftype: FunctionType::CmdScreen, ability_id: 1160, general_id: 0, avail: None },
    FunctionDef { id: 62, name: "Build_Interceptors_quick", ftype: FunctionType::CmdQuick, ability_id: 1042, general_id: 0, avail: None },
    FunctionDef { id: 63, name: "Build_Interceptors_autocast", ftype: FunctionType::Autocast, ability_id: 1042, general_id: 0, avail: None },
    FunctionDef { id: 524, name: "Build_LurkerDen_screen", ftype: FunctionType::CmdScreen, ability_id: 1163, general_id: 0, avail: None },
    FunctionDef { id: 64, name: "Build_MissileTurret_screen", ftype: FunctionType::CmdScreen, ability_id: 323, general_id: 0, avail: None },
    FunctionDef { id: 65, name: "Build_Nexus_screen", ftype: FunctionType::CmdScreen, ability_id: 880, general_id: 0, avail: None },
    FunctionDef { id: 66, name: "Build_Nuke_quick", ftype: FunctionType::CmdQuick, ability_id: 710, general_id: 0, avail: None },
    FunctionDef { id: 67, name: "Build_NydusNetwork_screen", ftype: FunctionType::CmdScreen, ability_id: 1161, general_id: 0, avail: None },
    FunctionDef { id: 68, name: "Build_NydusWorm_screen", ftype: FunctionType::CmdScreen, ability_id: 1768, general_id: 0, avail: None },
    FunctionDef { id: 69, name: "Build_PhotonCannon_screen", ftype: FunctionType::CmdScreen, ability_id: 887, general_id: 0, avail: None },
    FunctionDef { id: 70, name: "Build_Pylon_screen", ftype: FunctionType::CmdScreen, ability_id: 881, general_id: 0, avail: None },
    FunctionDef { id: 71, name: "Build_Reactor_quick", ftype: FunctionType::CmdQuick, ability_id: 3683, general_id: 0, avail: None },
    FunctionDef { id: 72, name: "Build_Reactor_screen", ftype: FunctionType::CmdScreen, ability_id: 3683, general_id: 0, avail: None },
    FunctionDef { id: 73, name: "Build_Reactor_Barracks_quick", ftype: FunctionType::CmdQuick, ability_id: 422, general_id: 3683, avail: None },
    FunctionDef { id: 74, name: "Build_Reactor_Barracks_screen", ftype: FunctionType::CmdScreen, ability_id: 422, general_id: 3683, avail: None },
    FunctionDef { id: 75, name: "Build_Reactor_Factory_quick", ftype: FunctionType::CmdQuick, ability_id: 455, general_id: 3683, avail: None },
    FunctionDef { id: 76, name: "Build_Reactor_Factory_screen", ftype: FunctionType::CmdScreen, ability_id: 455, general_id: 3683, avail: None },
    FunctionDef { id: 77, name: "Build_Reactor_Starport_quick", ftype: FunctionType::CmdQuick, ability_id: 488, general_id: 3683, avail: None },
    FunctionDef { id: 78, name: "Build_Reactor_Starport_screen", ftype: FunctionType::CmdScreen, ability_id: 488, general_id: 3683, avail: None },
    FunctionDef { id: 79, name: "Build_Refinery_screen", ftype: FunctionType::CmdScreen, ability_id: 320, general_id: 0, avail: None },
    FunctionDef { id: 80, name: "Build_RoachWarren_screen", ftype: FunctionType::CmdScreen, ability_id: 1165, general_id: 0, avail: None },
    FunctionDef { id: 81, name: "Build_RoboticsBay_screen", ftype: FunctionType::CmdScreen, ability_id: 892, general_id: 0, avail: None },
    FunctionDef { id: 82, name: "Build_RoboticsFacility_screen", ftype: FunctionType::CmdScreen, ability_id: 893, general_id: 0, avail: None },
    FunctionDef { id: 83, name: "Build_SensorTower_screen", ftype: FunctionType::CmdScreen, ability_id: 326, general_id: 0, avail: None },
    FunctionDef { id: 525, name: "Build_ShieldBattery_screen", ftype: FunctionType::CmdScreen, ability_id: 895, general_id: 0, avail: None },
    FunctionDef { id: 84, name: "Build_SpawningPool_screen", ftype: FunctionType::CmdScreen, ability_id: 1155, general_id: 0, avail: None },
    FunctionDef { id: 85, name: "Build_SpineCrawler_screen", ftype: FunctionType::CmdScreen, ability_id: 1166, general_id: 0, avail: None },
    FunctionDef { id: 86, name: "Build_Spire_screen", ftype: FunctionType::CmdScreen, ability_id: 1158, general_id: 0, avail: None },
    FunctionDef { id: 87, name: "Build_SporeCrawler_screen", ftype: FunctionType::CmdScreen, ability_id: 1167, general_id: 0, avail: None },
    FunctionDef { id: 88, name: "Build_Stargate_screen", ftype: FunctionType::CmdScreen, ability_id: 889, general_id: 0, avail: None },
    FunctionDef { id: 89, name: "Build_Starport_screen", ftype: FunctionType::CmdScreen, ability_id: 329, general_id: 0, avail: None },
    FunctionDef { id: 90, name: "Build_StasisTrap_screen", ftype: FunctionType::CmdScreen, ability_id: 2505, general_id: 0, avail: None },
    FunctionDef { id: 91, name: "Build_SupplyDepot_screen", ftype: FunctionType::CmdScreen, ability_id: 319, general_id: 0, avail: None },
    FunctionDef { id: 92, name: "Build_TechLab_quick", ftype: FunctionType::CmdQuick, ability_id: 3682, general_id: 0, avail: None },
    FunctionDef { id: 93, name: "Build_TechLab_screen", ftype: FunctionType::CmdScreen, ability_id: 3682, general_id: 0, avail: None },
    FunctionDef { id: 94, name: "Build_TechLab_Barracks_quick", ftype: FunctionType::CmdQuick, ability_id: 421, general_id: 3682, avail: None },
    FunctionDef { id: 95, name: "Build_TechLab_Barracks_screen", ftype: FunctionType::CmdScreen, ability_id: 421, general_id: 3682, avail: None },
    FunctionDef { id: 96, name: "Build_TechLab_Factory_quick", ftype: FunctionType::CmdQuick, ability_id: 454, general_id: 3682, avail: None },
    FunctionDef { id: 97, name: "Build_TechLab_Factory_screen", ftype: FunctionType::CmdScreen, ability_id: 454, general_id: 3682, avail: None },
    FunctionDef { id: 98, name: "Build_TechLab_Starport_quick", ftype: FunctionType::CmdQuick, ability_id: 487, general_id: 3682, avail: None },
    FunctionDef { id: 99, name: "Build_TechLab_Starport_screen", ftype: FunctionType::CmdScreen, ability_id: 487, general_id: 3682, avail: None },
    FunctionDef { id: 100, name: "Build_TemplarArchive_screen", ftype: FunctionType::CmdScreen, ability_id: 890, general_id: 0, avail: None },
    FunctionDef { id: 101, name: "Build_TwilightCouncil_screen", ftype: FunctionType::CmdScreen, ability_id: 886, general_id: 0, avail: None },
    FunctionDef { id: 102, name: "Build_UltraliskCavern_screen", ftype: FunctionType::CmdScreen, ability_id: 1159, general_id: 0, avail: None },
    FunctionDef { id: 103, name: "BurrowDown_quick", ftype: FunctionType::CmdQuick, ability_id: 3661, general_id: 0, avail: None },
    FunctionDef { id: 104, name: "BurrowDown_Baneling_quick", ftype: FunctionType::CmdQuick, ability_id: 1374, general_id: 3661, avail: None },
    FunctionDef { id: 105, name: "BurrowDown_Drone_quick", ftype: FunctionType::CmdQuick, ability_id: 1378, general_id: 3661, avail: None },
    FunctionDef { id: 106, name: "BurrowDown_Hydralisk_quick", ftype: FunctionType::CmdQuick, ability_id: 1382, general_id: 3661, avail: None },
    FunctionDef { id: 107, name: "BurrowDown_Infestor_quick", ftype: FunctionType::CmdQuick, ability_id: 1444, general_id: 3661, avail: None },
    FunctionDef { id: 108, name: "BurrowDown_InfestorTerran_quick", ftype: FunctionType::CmdQuick, ability_id: 1394, general_id: 3661, avail: None },
    FunctionDef { id: 109, name: "BurrowDown_Lurker_quick", ftype: FunctionType::CmdQuick, ability_id: 2108, general_id: 3661, avail: None },
    FunctionDef { id: 110, name: "BurrowDown_Queen_quick", ftype: FunctionType::CmdQuick, ability_id: 1433, general_id: 3661, avail: None },
    FunctionDef { id: 111, name: "BurrowDown_Ravager_quick", ftype: FunctionType::CmdQuick, ability_id: 2340, general_id: 3661, avail: None },
    FunctionDef { id: 112, name: "BurrowDown_Roach_quick", ftype: FunctionType::CmdQuick, ability_id: 1386, general_id: 3661, avail: None },
    FunctionDef { id: 113, name: "BurrowDown_SwarmHost_quick", ftype: FunctionType::CmdQuick, ability_id: 2014, general_id: 3661, avail: None },
    FunctionDef { id: 114, name: "BurrowDown_Ultralisk_quick", ftype: FunctionType::CmdQuick, ability_id: 1512, general_id: 3661, avail: None },
    FunctionDef { id: 115, name: "BurrowDown_WidowMine_quick", ftype: FunctionType::CmdQuick, ability_id: 2095, general_id: 3661, avail: None },
    FunctionDef { id: 116, name: "BurrowDown_Zergling_quick", ftype: FunctionType::CmdQuick, ability_id: 1390, general_id: 3661, avail: None },
    FunctionDef { id: 117, name: "BurrowUp_quick", ftype: FunctionType::CmdQuick, ability_id: 3662, general_id: 0, avail: None },
    FunctionDef { id: 118, name: "BurrowUp_autocast", ftype: FunctionType::Autocast, ability_id: 3662, general_id: 0, avail: None },
    FunctionDef { id: 119, name: "BurrowUp_Baneling_quick", ftype: FunctionType::CmdQuick, ability_id: 1376, general_id: 3662, avail: None },
    FunctionDef { id: 120, name: "BurrowUp_Baneling_autocast", ftype: FunctionType::Autocast, ability_id: 1376, general_id: 3662, avail: None },
    FunctionDef { id: 121, name: "BurrowUp_Drone_quick", ftype: FunctionType::CmdQuick, ability_id: 1380, general_id: 3662, avail: None },
    FunctionDef { id: 122, name: "BurrowUp_Hydralisk_quick", ftype: FunctionType::CmdQuick, ability_id: 1384, general_id: 3662, avail: None },
    FunctionDef { id: 123, name: "BurrowUp_Hydralisk_autocast", ftype: FunctionType::Autocast, ability_id: 1384, general_id: 3662, avail: None },
    FunctionDef { id: 124, name: "BurrowUp_Infestor_quick", ftype: FunctionType::CmdQuick, ability_id: 1446, general_id: 3662, avail: None },
    FunctionDef { id: 125, name: "BurrowUp_InfestorTerran_quick", ftype: FunctionType::CmdQuick, ability_id: 1396, general_id: 3662, avail: None },
    FunctionDef { id: 126, name: "BurrowUp_InfestorTerran_autocast", ftype: FunctionType::Autocast, ability_id: 1396, general_id: 3662, avail: None },
    FunctionDef { id: 127, name: "BurrowUp_Lurker_quick", ftype: FunctionType::CmdQuick, ability_id: 2110, general_id: 3662, avail: None },
    FunctionDef { id: 128, name: "BurrowUp_Queen_quick", ftype: FunctionType::CmdQuick, ability_id: 1435, general_id: 3662, avail: None },
    FunctionDef { id: 129, name: "BurrowUp_Queen_autocast", ftype: FunctionType::Autocast, ability_id: 1435, general_id: 3662, avail: None },
    FunctionDef { id: 130, name: "BurrowUp_Ravager_quick", ftype: FunctionType::CmdQuick, ability_id: 2342, general_id: 3662, avail: None },
    FunctionDef { id: 131, name: "BurrowUp_Ravager_autocast", ftype: FunctionType::Autocast, ability_id: 2342, general_id: 3662, avail: None },
    FunctionDef { id: 132, name: "BurrowUp_Roach_quick", ftype: FunctionType::CmdQuick, ability_id: 1388, general_id: 3662, avail: None },
    FunctionDef { id: 133, name: "BurrowUp_Roach_autocast", ftype: FunctionType::Autocast, ability_id: 1388, general_id: 3662, avail: None },
    FunctionDef { id: 134, name: "BurrowUp_SwarmHost_quick", ftype: FunctionType::CmdQuick, ability_id: 2016, general_id: 3662, avail: None },
    FunctionDef { id: 135, name: "BurrowUp_Ultralisk_quick", ftype: FunctionType::CmdQuick, ability_id: 1514, general_id: 3662, avail: None },
    FunctionDef { id: 136, name: "BurrowUp_Ultralisk_autocast", ftype: FunctionType::Autocast, ability_id: 1514, general_id: 3662, avail: None },
    FunctionDef { id: 137, name: "BurrowUp_WidowMine_quick", ftype: FunctionType::CmdQuick, ability_id: 2097, general_id: 3662, avail: None },
    FunctionDef { id: 138, name: "BurrowUp_Zergling_quick", ftype: FunctionType::CmdQuick, ability_id: 1392, general_id: 3662, avail: None },
    FunctionDef { id: 139, name: "BurrowUp_Zergling_autocast", ftype: FunctionType::Autocast, ability_id: 1392, general_id: 3662, avail: None },
    FunctionDef { id: 140, name: "Cancel_quick", ftype: FunctionType::CmdQuick, ability_id: 3659, general_id: 0, avail: None },
    FunctionDef { id: 141, name: "Cancel_AdeptPhaseShift_quick", ftype: FunctionType::CmdQuick, ability_id: 2594, general_id: 3659, avail: None },
    FunctionDef { id: 142, name: "Cancel_AdeptShadePhaseShift_quick", ftype: FunctionType::CmdQuick, ability_id: 2596, general_id: 3659, avail: None },
    FunctionDef { id: 143, name: "Cancel_BarracksAddOn_quick", ftype: FunctionType::CmdQuick, ability_id: 451, general_id: 3659, avail: None },
    FunctionDef { id: 144, name: "Cancel_BuildInProgress_quick", ftype: FunctionType::CmdQuick, ability_id: 314, general_id: 3659, avail: None },
    FunctionDef { id: 145, name: "Cancel_CreepTumor_quick", ftype: FunctionType::CmdQuick, ability_id: 1763, general_id: 3659, avail: None },
    FunctionDef { id: 146, name: "Cancel_FactoryAddOn_quick", ftype: FunctionType::CmdQuick, ability_id: 484, general_id: 3659, avail: None },
    FunctionDef { id: 147, name: "Cancel_GravitonBeam_quick", ftype: FunctionType::CmdQuick, ability_id: 174, general_id: 3659, avail: None },
    FunctionDef { id: 148, name: "Cancel_LockOn_quick", ftype: FunctionType::CmdQuick, ability_id: 2354, general_id: 3659, avail: None },
    FunctionDef { id: 149, name: "Cancel_MorphBroodlord_quick", ftype: FunctionType::CmdQuick, ability_id: 1373, general_id: 3659, avail: None },
    FunctionDef { id: 150, name: "Cancel_MorphGreaterSpire_quick", ftype: FunctionType::CmdQuick, ability_id: 1221, general_id: 3659, avail: None },
    FunctionDef { id: 151, name: "Cancel_MorphHive_quick", ftype: FunctionType::CmdQuick, ability_id: 1219, general_id: 3659, avail: None },
    FunctionDef { id: 152, name: "Cancel_MorphLair_quick", ftype: FunctionType::CmdQuick, ability_id: 1217, general_id: 3659, avail: None },
    FunctionDef { id: 153, name: "Cancel_MorphLurker_quick", ftype: FunctionType::CmdQuick, ability_id: 2333, general_id: 3659, avail: None },
    FunctionDef { id: 154, name: "Cancel_MorphLurkerDen_quick", ftype: FunctionType::CmdQuick, ability_id: 2113, general_id: 3659, avail: None },
    FunctionDef { id: 155, name: "Cancel_MorphMothership_quick", ftype: FunctionType::CmdQuick, ability_id: 1848, general_id: 3659, avail: None },
    FunctionDef { id: 156, name: "Cancel_MorphOrbital_quick", ftype: FunctionType::CmdQuick, ability_id: 1517, general_id: 3659, avail: None },
    FunctionDef { id: 157, name: "Cancel_MorphOverlordTransport_quick", ftype: FunctionType::CmdQuick, ability_id: 2709, general_id: 3659, avail: None },
    FunctionDef { id: 158, name: "Cancel_MorphOverseer_quick", ftype: FunctionType::CmdQuick, ability_id: 1449, general_id: 3659, avail: None },
    FunctionDef { id: 159, name: "Cancel_MorphPlanetaryFortress_quick", ftype: FunctionType::CmdQuick, ability_id: 1451, general_id: 3659, avail: None },
    FunctionDef { id: 160, name: "Cancel_MorphRavager_quick", ftype: FunctionType::CmdQuick, ability_id: 2331, general_id: 3659, avail: None },
    FunctionDef { id: 161, name: "Cancel_MorphThorExplosiveMode_quick", ftype: FunctionType::CmdQuick, ability_id: 2365, general_id: 3659, avail: None },
    FunctionDef { id: 162, name: "Cancel_NeuralParasite_quick", ftype: FunctionType::CmdQuick, ability_id: 250, general_id: 3659, avail: None },
    FunctionDef { id: 163, name: "Cancel_Nuke_quick", ftype: FunctionType::CmdQuick, ability_id: 1623, general_id: 3659, avail: None },
    FunctionDef { id: 164, name: "Cancel_SpineCrawlerRoot_quick", ftype: FunctionType::CmdQuick, ability_id: 1730, general_id: 3659, avail: None },
    FunctionDef { id: 165, name: "Cancel_SporeCrawlerRoot_quick", ftype: FunctionType::CmdQuick, ability_id: 1732, general_id: 3659, avail: None },
    FunctionDef { id: 166, name: "Cancel_StarportAddOn_quick", ftype: FunctionType::CmdQuick, ability_id: 517, general_id: 3659, avail: None },
    FunctionDef { id: 167, name: "Cancel_StasisTrap_quick", ftype: FunctionType::CmdQuick, ability_id: 2535, general_id: 3659, avail: None },
    FunctionDef { id: 546, name: "Cancel_VoidRayPrismaticAlignment_quick", ftype: FunctionType::CmdQuick, ability_id: 3707, general_id: 3659, avail: None },
    FunctionDef { id: 168, name: "Cancel_Last_quick", ftype: FunctionType::CmdQuick, ability_id: 3671, general_id: 0, avail: None },
    FunctionDef { id: 169, name: "Cancel_HangarQueue5_quick", ftype: FunctionType::CmdQuick, ability_id: 1038, general_id: 3671, avail: None },
    FunctionDef { id: 170, name: "Cancel_Queue1_quick", ftype: FunctionType::CmdQuick, ability_id: 304, general_id: 3671, avail: None },
    FunctionDef { id: 171, name: "Cancel_Queue5_quick", ftype: FunctionType::CmdQuick, ability_id: 306, general_id: 3671, avail: None },
    FunctionDef { id: 172, name: "Cancel_QueueAddOn_quick", ftype: FunctionType::CmdQuick, ability_id: 312, general_id: 3671, avail: None },
    FunctionDef { id: 173, name: "Cancel_QueueCancelToSelection_quick", ftype: FunctionType::CmdQuick, ability_id: 308, general_id: 3671, avail: None },
    FunctionDef { id: 174, name: "Cancel_QueuePassive_quick", ftype: FunctionType::CmdQuick, ability_id: 1831, general_id: 3671, avail: None },
    FunctionDef { id: 175, name: "Cancel_QueuePassiveCancelToSelection_quick", ftype: FunctionType::CmdQuick, ability_id: 1833, general_id: 3671, avail: None },
    FunctionDef { id: 176, name: "Effect_Abduct_screen", ftype: FunctionType::CmdScreen, ability_id: 2067, general_id: 0, avail: None },
    FunctionDef { id: 177, name: "Effect_AdeptPhaseShift_screen", ftype: FunctionType::CmdScreen, ability_id: 2544, general_id: 0, avail: None },
    FunctionDef { id: 547, name: "Effect_AdeptPhaseShift_minimap", ftype: FunctionType::CmdMinimap, ability_id: 2544, general_id: 0, avail: None },
    FunctionDef { id: 526, name: "Effect_AntiArmorMissile_screen", ftype: FunctionType::CmdScreen, ability_id: 3753, general_id: 0, avail: None },
    FunctionDef { id: 178, name: "Effect_AutoTurret_screen", ftype: FunctionType::CmdScreen, ability_id: 1764, general_id: 0, avail: None },
    FunctionDef { id: 179, name: "Effect_BlindingCloud_screen", ftype: FunctionType::CmdScreen, ability_id: 2063, general_id: 0, avail: None },
    FunctionDef { id: 180, name: "Effect_Blink_screen", ftype: FunctionType::CmdScreen, ability_id: 3687, general_id: 0, avail: None },
    FunctionDef { id: 543, name: "Effect_Blink_minimap", ftype: FunctionType::CmdMinimap, ability_id: 3687, general_id: 0, avail: None },
    FunctionDef { id: 181, name: "Effect_Blink_Stalker_screen", ftype: FunctionType::CmdScreen, ability_id: 1442, general_id: 3687, avail: None },
    FunctionDef { id: 544, name: "Effect_Blink_Stalker_minimap", ftype: FunctionType::CmdMinimap, ability_id: 1442, general_id: 3687, avail: None },
    FunctionDef { id: 182, name: "Effect_ShadowStride_screen", ftype: FunctionType::CmdScreen, ability_id: 2700, general_id: 3687, avail: None },
    FunctionDef { id: 545, name: "Effect_ShadowStride_minimap", ftype: FunctionType::CmdMinimap, ability_id: 2700, general_id: 3687, avail: None },
    FunctionDef { id: 183, name: "Effect_CalldownMULE_screen", ftype: FunctionType::CmdScreen, ability_id: 171, general_id: 0, avail: None },
    FunctionDef { id: 184, name: "Effect_CausticSpray_screen", ftype: FunctionType::CmdScreen, ability_id: 2324, general_id: 0, avail: None },
    FunctionDef { id: 185, name: "Effect_Charge_screen", ftype: FunctionType::CmdScreen, ability_id: 1819, general_id: 0, avail: None },
    FunctionDef { id: 186, name: "Effect_Charge_autocast", ftype: FunctionType::Autocast, ability_id: 1819, general_id: 0, avail: None },
    FunctionDef { id: 187, name: "Effect_ChronoBoost_screen", ftype: FunctionType::CmdScreen, ability_id: 261, general_id: 0, avail: None },
    FunctionDef { id: 527, name: "Effect_ChronoBoostEnergyCost_screen", ftype: FunctionType::CmdScreen, ability_id: 3755, general_id: 0, avail: None },
    FunctionDef { id: 188, name: "Effect_Contaminate_screen", ftype: FunctionType::CmdScreen, ability_id: 1825, general_id: 0, avail: None },
    FunctionDef { id: 189, name: "Effect_CorrosiveBile_screen", ftype: FunctionType::CmdScreen, ability_id: 2338, general_id: 0, avail: None },
    FunctionDef { id: 190, name: "Effect_EMP_screen", ftype: FunctionType::CmdScreen, ability_id: 1628, general_id: 0, avail: None },
    FunctionDef { id: 191, name: "Effect_Explode_quick", ftype: FunctionType::CmdQuick, ability_id: 42, general_id: 0, avail: None },
    FunctionDef { id: 192, name: "Effect_Feedback_screen", ftype: FunctionType::CmdScreen, ability_id: 140, general_id: 0, avail: None },
    FunctionDef { id: 193, name: "Effect_ForceField_screen", ftype: FunctionType::CmdScreen, ability_id: 1526, general_id: 0, avail: None },
    FunctionDef { id: 194, name: "Effect_FungalGrowth_screen", ftype: FunctionType::CmdScreen, ability_id: 74, general_id: 0, avail: None },
    FunctionDef { id: 195, name: "Effect_GhostSnipe_screen", ftype: FunctionType::CmdScreen, ability_id: 2714, general_id: 0, avail: None },
    FunctionDef { id: 196, name: "Effect_GravitonBeam_screen", ftype: FunctionType::CmdScreen, ability_id: 173, general_id: 0, avail: None },
    FunctionDef { id: 197, name: "Effect_GuardianShield_quick", ftype: FunctionType::CmdQuick, ability_id: 76, general_id: 0, avail: None },
    FunctionDef { id: 198, name: "Effect_Heal_screen", ftype: FunctionType::CmdScreen, ability_id: 386, general_id: 0, avail: None },
    FunctionDef { id: 199, name: "Effect_Heal_autocast", ftype: FunctionType::Autocast, ability_id: 386, general_id: 0, avail: None },
    FunctionDef { id: 200, name: "Effect_HunterSeekerMissile_screen", ftype: FunctionType::CmdScreen, ability_id: 169, general_id: 0, avail: None },
    FunctionDef { id: 201, name: "Effect_ImmortalBarrier_quick", ftype: FunctionType::CmdQuick, ability_id: 2328, general_id: 0, avail: None },
    FunctionDef { id: 202, name: "Effect_ImmortalBarrier_autocast", ftype: FunctionType::Autocast, ability_id: 2328, general_id: 0, avail: None },
    FunctionDef { id: 203, name: "Effect_InfestedTerrans_screen", ftype: FunctionType::CmdScreen, ability_id: 247, general_id: 0, avail: None },
    FunctionDef { id: 204, name: "Effect_InjectLarva_screen", ftype: FunctionType::CmdScreen, ability_id: 251, general_id: 0, avail: None },
    FunctionDef { id: 528, name: "Effect_InterferenceMatrix_screen", ftype: FunctionType::CmdScreen, ability_id: 3747, general_id: 0, avail: None },
    FunctionDef { id: 205, name: "Effect_KD8Charge_screen", ftype: FunctionType::CmdScreen, ability_id: 2588, general_id: 0, avail: None },
    FunctionDef { id: 206, name: "Effect_LockOn_screen", ftype: FunctionType::CmdScreen, ability_id: 2350, general_id: 0, avail: None },
    FunctionDef { id: 557, name: "Effect_LockOn_autocast", ftype: FunctionType::Autocast, ability_id: 2350, general_id: 0, avail: None },
    FunctionDef { id: 207, name: "Effect_LocustSwoop_screen", ftype: FunctionType::CmdScreen, ability_id: 2387, general_id: 0, avail: None },
    FunctionDef { id: 208, name: "Effect_MassRecall_screen", ftype: FunctionType::CmdScreen, ability_id: 3686, general_id: 0, avail: None },
    FunctionDef { id: 209, name: "Effect_MassRecall_Mothership_screen", ftype: FunctionType::CmdScreen, ability_id: 2368, general_id: 3686, avail: None },
    FunctionDef { id: 210, name: "Effect_MassRecall_MothershipCore_screen", ftype: FunctionType::CmdScreen, ability_id: 1974, general_id: 3686, avail: None },
    FunctionDef { id: 529, name: "Effect_MassRecall_Nexus_screen", ftype: FunctionType::CmdScreen, ability_id: 3757, general_id: 3686, avail: None },
    FunctionDef { id: 548, name: "Effect_MassRecall_StrategicRecall_screen", ftype: FunctionType::CmdScreen, ability_id: 142, general_id: 3686, avail: None },
    FunctionDef { id: 211, name: "Effect_MedivacIgniteAfterburners_quick", ftype: FunctionType::CmdQuick, ability_id: 2116, general_id: 0, avail: None },
    FunctionDef { id: 212, name: "Effect_NeuralParasite_screen", ftype: FunctionType::CmdScreen, ability_id: 249, general_id: 0, avail: None },
    FunctionDef { id: 213, name: "Effect_NukeCalldown_screen", ftype: FunctionType::CmdScreen, ability_id: 1622, general_id: 0, avail: None },
    FunctionDef { id: 214, name: "Effect_OracleRevelation_screen", ftype: FunctionType::CmdScreen, ability_id: 2146, general_id: 0, avail: None },
    FunctionDef { id: 215, name: "Effect_ParasiticBomb_screen", ftype: FunctionType::CmdScreen, ability_id: 2542, general_id: 0, avail: None },
    FunctionDef { id: 216, name: "Effect_PhotonOvercharge_screen", ftype: FunctionType::CmdScreen, ability_id: 2162, general_id: 0, avail: None },
    FunctionDef { id: 217, name: "Effect_PointDefenseDrone_screen", ftype: FunctionType::CmdScreen, ability_id: 144, general_id: 0, avail: None },
    FunctionDef { id: 218, name: "Effect_PsiStorm_screen", ftype: FunctionType::CmdScreen, ability_id: 1036, general_id: 0, avail: None },
    FunctionDef { id: 219, name: "Effect_PurificationNova_screen", ftype: FunctionType::CmdScreen, ability_id: 2346, general_id: 0, avail: None },
    FunctionDef { id: 220, name: "Effect_Repair_screen", ftype: FunctionType::CmdScreen, ability_id: 3685, general_id: 0, avail: None },
    FunctionDef { id: 221, name: "Effect_Repair_autocast", ftype: FunctionType::Autocast, ability_id: 3685, general_id: 0, avail: None },
    FunctionDef { id: 222, name: "Effect_Repair_Mule_screen", ftype: FunctionType::CmdScreen, ability_id: 78, general_id: 3685, avail: None },
    FunctionDef { id: 223, name: "Effect_Repair_Mule_autocast", ftype: FunctionType::Autocast, ability_id: 78, general_id: 3685, avail: None },
    FunctionDef { id: 530, name: "Effect_Repair_RepairDrone_screen", ftype: FunctionType::CmdScreen, ability_id: 3751, general_id: 3685, avail: None },
    FunctionDef { id: 531, name: "Effect_Repair_RepairDrone_autocast", ftype: FunctionType::Autocast, ability_id: 3751, general_id: 3685, avail: None },
    FunctionDef { id: 224, name: "Effect_Repair_SCV_screen", ftype: FunctionType::CmdScreen, ability_id: 316, general_id: 3685, avail: None },
    FunctionDef { id: 225, name: "Effect_Repair_SCV_autocast", ftype: FunctionType::Autocast, ability_id: 316, general_id: 3685, avail: None },
    FunctionDef { id: 532, name: "Effect_RepairDrone_screen", ftype: FunctionType::CmdScreen, ability_id: 3749, general_id: 0, avail: None },
    FunctionDef { id: 533, name: "Effect_Restore_screen", ftype: FunctionType::CmdScreen, ability_id: 3765, general_id: 0, avail: None },
    FunctionDef { id: 534, name: "Effect_Restore_autocast", ftype: FunctionType::Autocast, ability_id: 3765, general_id: 0, avail: None },
    FunctionDef { id: 226, name: "Effect_Salvage_quick", ftype: FunctionType::CmdQuick, ability_id: 32, general_id: 0, avail: None },
    FunctionDef { id: 227, name: "Effect_Scan_screen", ftype: FunctionType::CmdScreen, ability_id: 399, general_id: 0, avail: None },
    FunctionDef { id: 542, name: "Effect_Scan_minimap", ftype: FunctionType::CmdMinimap, ability_id: 399, general_id: 0, avail: None },
    FunctionDef { id: 228, name: "Effect_SpawnChangeling_quick", ftype: FunctionType::CmdQuick, ability_id: 181, general_id: 0, avail: None },
    FunctionDef { id: 229, name: "Effect_SpawnLocusts_screen", ftype: FunctionType::CmdScreen, ability_id: 2704, general_id: 0, avail: None },
    FunctionDef { id: 230, name: "Effect_Spray_screen", ftype: FunctionType::CmdScreen, ability_id: 3684, general_id: 0, avail: None },
    FunctionDef { id: 231, name: "Effect_Spray_Protoss_screen", ftype: FunctionType::CmdScreen, ability_id: 30, general_id: 3684, avail: None },
    FunctionDef { id: 232, name: "Effect_Spray_Terran_screen", ftype: FunctionType::CmdScreen, ability_id: 26, general_id: 3684, avail: None },
    FunctionDef { id: 233, name: "Effect_Spray_Zerg_screen", ftype: FunctionType::CmdScreen, ability_id: 28, general_id: 3684, avail: None },
    FunctionDef { id: 549, name: "Effect_Spray_minimap", ftype: FunctionType::CmdMinimap, ability_id: 3684, general_id: 0, avail: None },
    FunctionDef { id: 550, name: "Effect_Spray_Protoss_minimap", ftype: FunctionType::CmdMinimap, ability_id: 30, general_id: 3684, avail: None },
    FunctionDef { id: 551, name: "Effect_Spray_Terran_minimap", ftype: FunctionType::CmdMinimap, ability_id: 26, general_id: 3684, avail: None },
    FunctionDef { id: 552, name: "Effect_Spray_Zerg_minimap", ftype: FunctionType::CmdMinimap, ability_id: 28, general_id: 3684, avail: None },
    FunctionDef { id: 234, name: "Effect_Stim_quick", ftype: FunctionType::CmdQuick, ability_id: 3675, general_id: 0, avail: None },
    FunctionDef { id: 235, name: "Effect_Stim_Marauder_quick", ftype: FunctionType::CmdQuick, ability_id: 253, general_id: 3675, avail: None },
    FunctionDef { id: 236, name: "Effect_Stim_Marauder_Redirect_quick", ftype: FunctionType::CmdQuick, ability_id: 1684, general_id: 3675, avail: None },
    FunctionDef { id: 237, name: "Effect_Stim_Marine_quick", ftype: FunctionType::CmdQuick, ability_id: 380, general_id: 3675, avail: None },
    FunctionDef { id: 238, name: "Effect_Stim_Marine_Redirect_quick", ftype: FunctionType::CmdQuick, ability_id: 1683, general_id: 3675, avail: None },
    FunctionDef { id: 239, name: "Effect_SupplyDrop_screen", ftype: FunctionType::CmdScreen, ability_id: 255, general_id: 0, avail: None },
    FunctionDef { id: 240, name: "Effect_TacticalJump_screen", ftype: FunctionType::CmdScreen, ability_id: 2358, general_id: 0, avail: None },
    FunctionDef { id: 553, name: "Effect_TacticalJump_minimap", ftype: FunctionType::CmdMinimap, ability_id: 2358, general_id: 0, avail: None },
    FunctionDef { id: 241, name: "Effect_TimeWarp_screen", ftype: FunctionType::CmdScreen, ability_id: 2244, general_id: 0, avail: None },
    FunctionDef { id: 242, name: "Effect_Transfusion_screen", ftype: FunctionType::CmdScreen, ability_id: 1664, general_id: 0, avail: None },
    FunctionDef { id: 243, name: "Effect_ViperConsume_screen", ftype: FunctionType::CmdScreen, ability_id: 2073, general_id: 0, avail: None },
    FunctionDef { id: 244, name: "Effect_VoidRayPrismaticAlignment_quick", ftype: FunctionType::CmdQuick, ability_id: 2393, general_id: 0, avail: None },
    FunctionDef { id: 245, name: "Effect_WidowMineAttack_screen", ftype: FunctionType::CmdScreen, ability_id: 2099, general_id: 0, avail: None },
    FunctionDef { id: 246, name: "Effect_WidowMineAttack_autocast", ftype: FunctionType::Autocast, ability_id: 2099, general_id: 0, avail: None },
    FunctionDef { id: 247, name: "Effect_YamatoGun_screen", ftype: FunctionType::CmdScreen, ability_id: 401, general_id: 0, avail: None },
    FunctionDef { id: 248, name: "Hallucination_Adept_quick", ftype: FunctionType::CmdQuick, ability_id: 2391, general_id: 0, avail: None },
    FunctionDef { id: 249, name: "Hallucination_Archon_quick", ftype: FunctionType::CmdQuick, ability_id: 146, general_id: 0, avail: None },
    FunctionDef { id: 250, name: "Hallucination_Colossus_quick", ftype: FunctionType::CmdQuick, ability_id: 148, general_id: 0, avail: None },
    FunctionDef { id: 251, name: "Hallucination_Disruptor_quick", ftype: FunctionType::CmdQuick, ability_id: 2389, general_id: 0, avail: None },
    FunctionDef { id: 252, name: "Hallucination_HighTemplar_quick", ftype: FunctionType::CmdQuick, ability_id: 150, general_id: 0, avail: None },
    FunctionDef { id: 253, name: "Hallucination_Immortal_quick", ftype: FunctionType::CmdQuick, ability_id: 152, general_id: 0, avail: None },
    FunctionDef { id: 254, name: "Hallucination_Oracle_quick", ftype: FunctionType::CmdQuick, ability_id: 2114, general_id: 0, avail: None },
    FunctionDef { id: 255, name: "Hallucination_Phoenix_quick", ftype: FunctionType::CmdQuick, ability_id: 154, general_id: 0, avail: None },
    FunctionDef { id: 256, name: "Hallucination_Probe_quick", ftype: FunctionType::CmdQuick, ability_id: 156, general_id: 0, avail: None },
    FunctionDef { id: 257, name: "Hallucination_Stalker_quick", ftype: FunctionType::CmdQuick, ability_id: 158, general_id: 0, avail: None },
    FunctionDef { id: 258, name: "Hallucination_VoidRay_quick", ftype: FunctionType::CmdQuick, ability_id: 160, general_id: 0, avail: None },
    FunctionDef { id: 259, name: "Hallucination_WarpPrism_quick", ftype: FunctionType::CmdQuick, ability_id: 162, general_id: 0, avail: None },
    FunctionDef { id: 260, name: "Hallucination_Zealot_quick", ftype: FunctionType::CmdQuick, ability_id: 164, general_id: 0, avail: None },
    FunctionDef { id: 261, name: "Halt_quick", ftype: FunctionType::CmdQuick, ability_id: 3660, general_id: 0, avail: None },
    FunctionDef { id: 262, name: "Halt_Building_quick", ftype: FunctionType::CmdQuick, ability_id: 315, general_id: 3660, avail: None },
    FunctionDef { id: 263, name: "Halt_TerranBuild_quick", ftype: FunctionType::CmdQuick, ability_id: 348, general_id: 3660, avail: None },
    FunctionDef { id: 264, name: "Harvest_Gather_screen", ftype: FunctionType::CmdScreen, ability_id: 3666, general_id: 0, avail: None },
    FunctionDef { id: 265, name: "Harvest_Gather_Drone_screen", ftype: FunctionType::CmdScreen, ability_id: 1183, general_id: 3666, avail: None },
    FunctionDef { id: 266, name: "Harvest_Gather_Mule_screen", ftype: FunctionType::CmdScreen, ability_id: 166, general_id: 3666, avail: None },
    FunctionDef { id: 267, name: "Harvest_Gather_Probe_screen", ftype: FunctionType::CmdScreen, ability_id: 298, general_id: 3666, avail: None },
    FunctionDef { id: 268, name: "Harvest_Gather_SCV_screen", ftype: FunctionType::CmdScreen, ability_id: 295, general_id: 3666, avail: None },
    FunctionDef { id: 269, name: "Harvest_Return_quick", ftype: FunctionType::CmdQuick, ability_id: 3667, general_id: 0, avail: None },
    FunctionDef { id: 270, name: "Harvest_Return_Drone_quick", ftype: FunctionType::CmdQuick, ability_id: 1184, general_id: 3667, avail: None },
    FunctionDef { id: 271, name: "Harvest_Return_Mule_quick", ftype: FunctionType::CmdQuick, ability_id: 167, general_id: 3667, avail: None },
    FunctionDef { id: 272, name: "Harvest_Return_Probe_quick", ftype: FunctionType::CmdQuick, ability_id: 299, general_id: 3667, avail: None },
    FunctionDef { id: 273, name: "Harvest_Return_SCV_quick", ftype: FunctionType::CmdQuick, ability_id: 296, general_id: 3667, avail: None },
    FunctionDef { id: 274, name: "HoldPosition_quick", ftype: FunctionType::CmdQuick, ability_id: 3793, general_id: 0, avail: None },
    FunctionDef { id: 558, name: "HoldPosition_Battlecruiser_quick", ftype: FunctionType::CmdQuick, ability_id: 3778, general_id: 3793, avail: None },
    FunctionDef { id: 559, name: "HoldPosition_Hold_quick", ftype: FunctionType::CmdQuick, ability_id: 18, general_id: 3793, avail: None },
    FunctionDef { id: 275, name: "Land_screen", ftype: FunctionType::CmdScreen, ability_id: 3678, general_id: 0, avail: None },
    FunctionDef { id: 276, name: "Land_Barracks_screen", ftype: FunctionType::CmdScreen, ability_id: 554, general_id: 3678, avail: None },
    FunctionDef { id: 277, name: "Land_CommandCenter_screen", ftype: FunctionType::CmdScreen, ability_id: 419, general_id: 3678, avail: None },
    FunctionDef { id: 278, name: "Land_Factory_screen", ftype: FunctionType::CmdScreen, ability_id: 520, general_id: 3678, avail: None },
    FunctionDef { id: 279, name: "Land_OrbitalCommand_screen", ftype: FunctionType::CmdScreen, ability_id: 1524, general_id: 3678, avail: None },
    FunctionDef { id: 280, name: "Land_Starport_screen", ftype: FunctionType::CmdScreen, ability_id: 522, general_id: 3678, avail: None },
    FunctionDef { id: 281, name: "Lift_quick", ftype: FunctionType::CmdQuick, ability_id: 3679, general_id: 0, avail: None },
    FunctionDef { id: 282, name: "Lift_Barracks_quick", ftype: FunctionType::CmdQuick, ability_id: 452, general_id: 3679, avail: None },
    FunctionDef { id: 283, name: "Lift_CommandCenter_quick", ftype: FunctionType::CmdQuick, ability_id: 417, general_id: 3679, avail: None },
    FunctionDef { id: 284, name: "Lift_Factory_quick", ftype: FunctionType::CmdQuick, ability_id: 485, general_id: 3679, avail: None },
    FunctionDef { id: 285, name: "Lift_OrbitalCommand_quick", ftype: FunctionType::CmdQuick, ability_id: 1522, general_id: 3679, avail: None },
    FunctionDef { id: 286, name: "Lift_Starport_quick", ftype: FunctionType::CmdQuick, ability_id: 518, general_id: 3679, avail: None },
    FunctionDef { id: 287, name: "Load_screen", ftype: FunctionType::CmdScreen, ability_id: 3668, general_id: 0, avail: None },
    FunctionDef { id: 288, name: "Load_Bunker_screen", ftype: FunctionType::CmdScreen, ability_id: 407, general_id: 3668, avail: None },
    FunctionDef { id: 289, name: "Load_Medivac_screen", ftype: FunctionType::CmdScreen, ability_id: 394, general_id: 3668, avail: None },
    FunctionDef { id: 290, name: "Load_NydusNetwork_screen", ftype: FunctionType::CmdScreen, ability_id: 1437, general_id: 3668, avail: None },
    FunctionDef { id: 291, name: "Load_NydusWorm_screen", ftype: FunctionType::CmdScreen, ability_id: 2370, general_id: 3668, avail: None },
    FunctionDef { id: 292, name: "Load_Overlord_screen", ftype: FunctionType::CmdScreen, ability_id: 1406, general_id: 3668, avail: None },
    FunctionDef { id: 293, name: "Load_WarpPrism_screen", ftype: FunctionType::CmdScreen, ability_id: 911, general_id: 3668, avail: None },
    FunctionDef { id: 294, name: "LoadAll_quick", ftype: FunctionType::CmdQuick, ability_id: 3663, general_id: 0, avail: None },
    FunctionDef { id: 295, name: "LoadAll_CommandCenter_quick", ftype: FunctionType::CmdQuick, ability_id: 416, general_id: 3663, avail: None },
    FunctionDef { id: 296, name: "Morph_Archon_quick", ftype: FunctionType::CmdQuick, ability_id: 1766, general_id: 0, avail: None },
    FunctionDef { id: 297, name: "Morph_BroodLord_quick", ftype: FunctionType::CmdQuick, ability_id: 1372, general_id: 0, avail: None },
    FunctionDef { id: 298, name: "Morph_Gateway_quick", ftype: FunctionType::CmdQuick, ability_id: 1520, general_id: 0, avail: None },
    FunctionDef { id: 299, name: "Morph_GreaterSpire_quick", ftype: FunctionType::CmdQuick, ability_id: 1220, general_id: 0, avail: None },
    FunctionDef { id: 300, name: "Morph_Hellbat_quick", ftype: FunctionType::CmdQuick, ability_id: 1998, general_id: 0, avail: None },
    FunctionDef { id: 301, name: "Morph_Hellion_quick", ftype: FunctionType::CmdQuick, ability_id: 1978, general_id: 0, avail: None },
    FunctionDef { id: 302, name: "Morph_Hive_quick", ftype: FunctionType::CmdQuick, ability_id: 1218, general_id: 0, avail: None },
    FunctionDef { id: 303, name: "Morph_Lair_quick", ftype: FunctionType::CmdQuick, ability_id: 1216, general_id: 0, avail: None },
    FunctionDef { id: 304, name: "Morph_LiberatorAAMode_quick", ftype: FunctionType::CmdQuick, ability_id: 2560, general_id: 0, avail: None },
    FunctionDef { id: 305, name: "Morph_LiberatorAGMode_screen", ftype: FunctionType::CmdScreen, ability_id: 2558, general_id: 0, avail: None },
    FunctionDef { id: 554, name: "Morph_LiberatorAGMode_minimap", ftype: FunctionType::CmdMinimap, ability_id: 2558, general_id: 0, avail: None },
    FunctionDef { id: 306, name: "Morph_Lurker_quick", ftype: FunctionType::CmdQuick, ability_id: 2332, general_id: 0, avail: None },
    FunctionDef { id: 307, name: "Morph_LurkerDen_quick", ftype: FunctionType::CmdQuick, ability_id: 2112, general_id: 0, avail: None },
    FunctionDef { id: 308, name: "Morph_Mothership_quick", ftype: FunctionType::CmdQuick, ability_id: 1847, general_id: 0, avail: None },
    FunctionDef { id: 535, name: "Morph_ObserverMode_quick", ftype: FunctionType::CmdQuick, ability_id: 3739, general_id: 0, avail: None },
    FunctionDef { id: 309, name: "Morph_OrbitalCommand_quick", ftype: FunctionType::CmdQuick, ability_id: 1516, general_id: 0, avail: None },
    FunctionDef { id: 310, name: "Morph_OverlordTransport_quick", ftype: FunctionType::CmdQuick, ability_id: 2708, general_id: 0, avail: None },
    FunctionDef { id: 311, name: "Morph_Overseer_quick", ftype: FunctionType::CmdQuick, ability_id: 1448, general_id: 0, avail: None },
    FunctionDef { id: 536, name: "Morph_OverseerMode_quick", ftype: FunctionType::CmdQuick, ability_id: 3745, general_id: 0, avail: None },
    FunctionDef { id: 537, name: "Morph_OversightMode_quick", ftype: FunctionType::CmdQuick, ability_id: 3743, general_id: 0, avail: None },
    FunctionDef { id: 312, name: "Morph_PlanetaryFortress_quick", ftype: FunctionType::CmdQuick, ability_id: 1450, general_id: 0, avail: None },
    FunctionDef { id: 313, name: "Morph_Ravager_quick", ftype: FunctionType::CmdQuick, ability_id: 2330, general_id: 0, avail: None },
    FunctionDef { id: 314, name: "Morph_Root_screen", ftype: FunctionType::CmdScreen, ability_id: 3680, general_id: 0, avail: None },
    FunctionDef { id: 315, name: "Morph_SpineCrawlerRoot_screen", ftype: FunctionType::CmdScreen, ability_id: 1729, general_id: 3680, avail: None },
    FunctionDef { id: 316, name: "Morph_SporeCrawlerRoot_screen", ftype: FunctionType::CmdScreen, ability_id: 1731, general_id: 3680, avail: None },
    FunctionDef { id: 317, name: "Morph_SiegeMode_quick", ftype: FunctionType::CmdQuick, ability_id: 388, general_id: 0, avail: None },
    FunctionDef { id: 318, name: "Morph_SupplyDepot_Lower_quick", ftype: FunctionType::CmdQuick, ability_id: 556, general_id: 0, avail: None },
    FunctionDef { id: 319, name: "Morph_SupplyDepot_Raise_quick", ftype: FunctionType::CmdQuick, ability_id: 558, general_id: 0, avail: None },
    FunctionDef { id: 538, name: "Morph_SurveillanceMode_quick", ftype: FunctionType::CmdQuick, ability_id: 3741, general_id: 0, avail: None },
    FunctionDef { id: 320, name: "Morph_ThorExplosiveMode_quick", ftype: FunctionType::CmdQuick, ability_id: 2364, general_id: 0, avail: None },
    FunctionDef { id: 321, name: "Morph_ThorHighImpactMode_quick", ftype: FunctionType::CmdQuick, ability_id: 2362, general_id: 0, avail: None },
    FunctionDef { id: 322, name: "Morph_Unsiege_quick", ftype: FunctionType::CmdQuick, ability_id: 390, general_id: 0, avail: None },
    FunctionDef { id: 323, name: "Morph_Uproot_quick", ftype: FunctionType::CmdQuick, ability_id: 3681, general_id: 0, avail: None },
    FunctionDef { id: 324, name: "Morph_SpineCrawlerUproot_quick", ftype: FunctionType::CmdQuick, ability_id: 1725, general_id: 3681, avail: None },
    FunctionDef { id: 325, name: "Morph_SporeCrawlerUproot_quick", ftype: FunctionType::CmdQuick, ability_id: 1727, general_id: 3681, avail: None },
    FunctionDef { id: 326, name: "Morph_VikingAssaultMode_quick", ftype: FunctionType::CmdQuick, ability_id: 403, general_id: 0, avail: None },
    FunctionDef { id: 327, name: "Morph_VikingFighterMode_quick", ftype: FunctionType::CmdQuick, ability_id: 405, general_id: 0, avail: None },
    FunctionDef { id: 328, name: "Morph_WarpGate_quick", ftype: FunctionType::CmdQuick, ability_id: 1518, general_id: 0, avail: None },
    FunctionDef { id: 560, name: "Morph_WarpGate_autocast", ftype: FunctionType::Autocast, ability_id: 1518, general_id: 0, avail: None },
    FunctionDef { id: 329, name: "Morph_WarpPrismPhasingMode_quick", ftype: FunctionType::CmdQuick, ability_id: 1528, general_id: 0, avail: None },
    FunctionDef { id: 330, name: "Morph_WarpPrismTransportMode_quick", ftype: FunctionType::CmdQuick, ability_id: 1530, general_id: 0, avail: None },
    FunctionDef { id: 331, name: "Move_screen", ftype: FunctionType::CmdScreen, ability_id: 3794, general_id: 0, avail: None },
    FunctionDef { id: 332, name: "Move_minimap", ftype: FunctionType::CmdMinimap, ability_id: 3794, general_id: 0, avail: None },
    FunctionDef { id: 561, name: "Move_Battlecruiser_screen", ftype: FunctionType::CmdScreen, ability_id: 3776, general_id: 3794, avail: None },
    FunctionDef { id: 562, name: "Move_Battlecruiser_minimap", ftype: FunctionType::CmdMinimap, ability_id: 3776, general_id: 3794, avail: None },
    FunctionDef { id: 563, name: "Move_Move_screen", ftype: FunctionType::CmdScreen, ability_id: 16, general_id: 3794, avail: None },
    FunctionDef { id: 564, name: "Move_Move_minimap", ftype: FunctionType::CmdMinimap, ability_id: 16, general_id: 3794, avail: None },
    FunctionDef { id: 333, name: "Patrol_screen", ftype: FunctionType::CmdScreen, ability_id: 3795, general_id: 0, avail: None },
    FunctionDef { id: 334, name: "Patrol_minimap", ftype: FunctionType::CmdMinimap, ability_id: 3795, general_id: 0, avail: None },
    FunctionDef { id: 565, name: "Patrol_Battlecruiser_screen", ftype: FunctionType::CmdScreen, ability_id: 3777, general_id: 3795, avail: None },
    FunctionDef { id: 566, name: "Patrol_Battlecruiser_minimap", ftype: FunctionType::CmdMinimap, ability_id: 3777, general_id: 3795, avail: None },
    FunctionDef { id: 567, name: "Patrol_Patrol_screen", ftype: FunctionType::CmdScreen, ability_id: 17, general_id: 3795, avail: None },
    FunctionDef { id: 568, name: "Patrol_Patrol_minimap", ftype: FunctionType::CmdMinimap, ability_id: 17, general_id: 3795, avail: None },
    FunctionDef { id: 335, name: "Rally_Units_screen", ftype: FunctionType::CmdScreen, ability_id: 3673, general_id: 0, avail: None },
    FunctionDef { id: 336, name: "Rally_Units_minimap", ftype: FunctionType::CmdMinimap, ability_id: 3673, general_id: 0, avail: None },
    FunctionDef { id: 337, name: "Rally_Building_screen", ftype: FunctionType::CmdScreen, ability_id: 195, general_id: 3673, avail: None },
    FunctionDef { id: 338, name: "Rally_Building_minimap", ftype: FunctionType::CmdMinimap, ability_id: 195, general_id: 3673, avail: None },
    FunctionDef { id: 339, name: "Rally_Hatchery_Units_screen", ftype: FunctionType::CmdScreen, ability_id: 211, general_id: 3673, avail: None },
    FunctionDef { id: 340, name: "Rally_Hatchery_Units_minimap", ftype: FunctionType::CmdMinimap, ability_id: 211, general_id: 3673, avail: None },
    FunctionDef { id: 341, name: "Rally_Morphing_Unit_screen", ftype: FunctionType::CmdScreen, ability_id: 199, general_id: 3673, avail: None },
    FunctionDef { id: 342, name: "Rally_Morphing_Unit_minimap", ftype: FunctionType::CmdMinimap, ability_id: 199, general_id: 3673, avail: None },
    FunctionDef { id: 343, name: "Rally_Workers_screen", ftype: FunctionType::CmdScreen, ability_id: 3690, general_id: 0, avail: None },
    FunctionDef { id: 344, name: "Rally_Workers_minimap", ftype: FunctionType::CmdMinimap, ability_id: 3690, general_id: 0, avail: None },
    FunctionDef { id: 345, name: "Rally_CommandCenter_screen", ftype: FunctionType::CmdScreen, ability_id: 203, general_id: 3690, avail: None },
    FunctionDef { id: 346, name: "Rally_CommandCenter_minimap", ftype: FunctionType::CmdMinimap, ability_id: 203, general_id: 3690, avail: None },
    FunctionDef { id: 347, name: "Rally_Hatchery_Workers_screen", ftype: FunctionType::CmdScreen, ability_id: 212, general_id: 3690, avail: None },
    FunctionDef { id: 348, name: "Rally_Hatchery_Workers_minimap", ftype: FunctionType::CmdMinimap, ability_id: 212, general_id: 3690, avail: None },
    FunctionDef { id: 349, name: "Rally_Nexus_screen", ftype: FunctionType::CmdScreen, ability_id: 207, general_id: 3690, avail: None },
    FunctionDef { id: 350, name: "Rally_Nexus_minimap", ftype: FunctionType::CmdMinimap, ability_id: 207, general_id: 3690, avail: None },
    FunctionDef { id: 539, name: "Research_AdaptiveTalons_quick", ftype: FunctionType::CmdQuick, ability_id: 3709, general_id: 0, avail: None },
    FunctionDef { id: 351, name: "Research_AdeptResonatingGlaives_quick", ftype: FunctionType::CmdQuick, ability_id: 1594, general_id: 0, avail: None },
    FunctionDef { id: 352, name: "Research_AdvancedBallistics_quick", ftype: FunctionType::CmdQuick, ability_id: 805, general_id: 0, avail: None },
    FunctionDef { id: 569, name: "Research_AnabolicSynthesis_quick", ftype: FunctionType::CmdQuick, ability_id: 263, general_id: 0, avail: None },
    FunctionDef { id: 353, name: "Research_BansheeCloakingField_quick", ftype: FunctionType::CmdQuick, ability_id: 790, general_id: 0, avail: None },
    FunctionDef { id: 354, name: "Research_BansheeHyperflightRotors_quick", ftype: FunctionType::CmdQuick, ability_id: 799, general_id: 0, avail: None },
    FunctionDef { id: 355, name: "Research_BattlecruiserWeaponRefit_quick", ftype: FunctionType::CmdQuick, ability_id: 1532, general_id: 0, avail: None },
    FunctionDef { id: 356, name: "Research_Blink_quick", ftype: FunctionType::CmdQuick, ability_id: 1593, general_id: 0, avail: None },
    FunctionDef { id: 357, name: "Research_Burrow_quick", ftype: FunctionType::CmdQuick, ability_id: 1225, general_id: 0, avail: None },
    FunctionDef { id: 358, name: "Research_CentrifugalHooks_quick", ftype: FunctionType::CmdQuick, ability_id: 1482, general_id: 0, avail: None },
    FunctionDef { id: 359, name: "Research_Charge_quick", ftype: FunctionType::CmdQuick, ability_id: 1592, general_id: 0, avail: None },
    FunctionDef { id: 360, name: "Research_ChitinousPlating_quick", ftype: FunctionType::CmdQuick, ability_id: 265, general_id: 0, avail: None },
    FunctionDef { id: 361, name: "Research_CombatShield_quick", ftype: FunctionType::CmdQuick, ability_id: 731, general_id: 0, avail: None },
    FunctionDef { id: 362, name: "Research_ConcussiveShells_quick", ftype: FunctionType::CmdQuick, ability_id: 732, general_id: 0, avail: None },
    FunctionDef { id: 570, name: "Research_CycloneLockOnDamage_quick", ftype: FunctionType::CmdQuick, ability_id: 769, general_id: 0, avail: None },
    FunctionDef { id: 540, name: "Research_CycloneRapidFireLaunchers_quick", ftype: FunctionType::CmdQuick, ability_id: 768, general_id: 0, avail: None },
    FunctionDef { id: 363, name: "Research_DrillingClaws_quick", ftype: FunctionType::CmdQuick, ability_id: 764, general_id: 0, avail: None },
    FunctionDef { id: 572, name: "Research_EnhancedShockwaves_quick", ftype: FunctionType::CmdQuick, ability_id: 822, general_id: 0, avail: None },
    FunctionDef { id: 364, name: "Research_ExtendedThermalLance_quick", ftype: FunctionType::CmdQuick, ability_id: 1097, general_id: 0, avail: None },
    FunctionDef { id: 365, name: "Research_GlialRegeneration_quick", ftype: FunctionType::CmdQuick, ability_id: 216, general_id: 0, avail: None },
    FunctionDef { id: 366, name: "Research_GraviticBooster_quick", ftype: FunctionType::CmdQuick, ability_id: 1093, general_id: 0, avail: None },
    FunctionDef { id: 367, name: "Research_GraviticDrive_quick", ftype: FunctionType::CmdQuick, ability_id: 1094, general_id: 0, avail: None },
    FunctionDef { id: 368, name: "Research_GroovedSpines_quick", ftype: FunctionType::CmdQuick, ability_id: 1282, general_id: 0, avail: None },
    FunctionDef { id: 369, name: "Research_HiSecAutoTracking_quick", ftype: FunctionType::CmdQuick, ability_id: 650, general_id: 0, avail: None },
    FunctionDef { id: 370, name: "Research_HighCapacityFuelTanks_quick", ftype: FunctionType::CmdQuick, ability_id: 804, general_id: 0, avail: None },
    FunctionDef { id: 371, name: "Research_InfernalPreigniter_quick", ftype: FunctionType::CmdQuick, ability_id: 761, general_id: 0, avail: None },
    FunctionDef { id: 372, name: "Research_InterceptorGravitonCatapult_quick", ftype: FunctionType::CmdQuick, ability_id: 44, general_id: 0, avail: None },
    FunctionDef { id: 374, name: "Research_MuscularAugments_quick", ftype: FunctionType::CmdQuick, ability_id: 1283, general_id: 0, avail: None },
    FunctionDef { id: 375, name: "Research_NeosteelFrame_quick", ftype: FunctionType::CmdQuick, ability_id: 655, general_id: 0, avail: None },
    FunctionDef { id: 376, name: "Research_NeuralParasite_quick", ftype: FunctionType::CmdQuick, ability_id: 1455, general_id: 0, avail: None },
    FunctionDef { id: 377, name: "Research_PathogenGlands_quick", ftype: FunctionType::CmdQuick, ability_id: 1454, general_id: 0, avail: None },
    FunctionDef { id: 378, name: "Research_PersonalCloaking_quick", ftype: FunctionType::CmdQuick, ability_id: 820, general_id: 0, avail: None },
    FunctionDef { id: 379, name: "Research_PhoenixAnionPulseCrystals_quick", ftype: FunctionType::CmdQuick, ability_id: 46, general_id: 0, avail: None },
    FunctionDef { id: 380, name: "Research_PneumatizedCarapace_quick", ftype: FunctionType::CmdQuick, ability_id: 1223, general_id: 0, avail: None },
    FunctionDef { id: 381, name: "Research_ProtossAirArmor_quick", ftype: FunctionType::CmdQuick, ability_id: 3692, general_id: 0, avail: None },
    FunctionDef { id: 382, name: "Research_ProtossAirArmorLevel1_quick", ftype: FunctionType::CmdQuick, ability_id: 1565, general_id: 3692, avail: None },
    FunctionDef { id: 383, name: "Research_ProtossAirArmorLevel2_quick", ftype: FunctionType::CmdQuick, ability_id: 1566, general_id: 3692, avail: None },
    FunctionDef { id: 384, name: "Research_ProtossAirArmorLevel3_quick", ftype: FunctionType::CmdQuick, ability_id: 1567, general_id: 3692, avail: None },
    FunctionDef { id: 385, name: "Research_ProtossAirWeapons_quick", ftype: FunctionType::CmdQuick, ability_id: 3693, general_id: 0, avail: None },
    FunctionDef { id: 386, name: "Research_ProtossAirWeaponsLevel1_quick", ftype: FunctionType::CmdQuick, ability_id: 1562, general_id: 3693, avail: None },
    FunctionDef { id: 387, name: "Research_ProtossAirWeaponsLevel2_quick", ftype: FunctionType::CmdQuick, ability_id: 1563, general_id: 3693, avail: None },
    FunctionDef { id: 388, name: "Research_ProtossAirWeaponsLevel3_quick", ftype: FunctionType::CmdQuick, ability_id: 1564, general_id: 3693, avail: None },
    FunctionDef { id: 389, name: "Research_ProtossGroundArmor_quick", ftype: FunctionType::CmdQuick, ability_id: 3694, general_id: 0, avail: None },
    FunctionDef { id: 390, name: "Research_ProtossGroundArmorLevel1_quick", ftype: FunctionType::CmdQuick, ability_id: 1065, general_id: 3694, avail: None },
    FunctionDef { id: 391, name: "Research_ProtossGroundArmorLevel2_quick", ftype: FunctionType::CmdQuick, ability_id: 1066, general_id: 3694, avail: None },
    FunctionDef { id: 392, name: "Research_ProtossGroundArmorLevel3_quick", ftype: FunctionType::CmdQuick, ability_id: 1067, general_id: 3694, avail: None },
    FunctionDef { id: 393, name: "Research_ProtossGroundWeapons_quick", ftype: FunctionType::CmdQuick, ability_id: 3695, general_id: 0, avail: None },
    FunctionDef { id: 394, name: "Research_ProtossGroundWeaponsLevel1_quick", ftype: FunctionType::CmdQuick, ability_id: 1062, general_id: 3695, avail: None },
    FunctionDef { id: 395, name: "Research_ProtossGroundWeaponsLevel2_quick", ftype: FunctionType::CmdQuick, ability_id: 1063, general_id: 3695, avail: None },
    FunctionDef { id: 396, name: "Research_ProtossGroundWeaponsLevel3_quick", ftype: FunctionType::CmdQuick, ability_id: 1064, general_id: 3695, avail: None },
    FunctionDef { id: 397, name: "Research_ProtossShields_quick", ftype: FunctionType::CmdQuick, ability_id: 3696, general_id: 0, avail: None },
    FunctionDef { id: 398, name: "Research_ProtossShieldsLevel1_quick", ftype: FunctionType::CmdQuick, ability_id: 1068, general_id: 3696, avail: None },
    FunctionDef { id: 399, name: "Research_ProtossShieldsLevel2_quick", ftype: FunctionType::CmdQuick, ability_id: 1069, general_id: 3696, avail: None },
    FunctionDef { id: 400, name: "Research_ProtossShieldsLevel3_quick", ftype: FunctionType::CmdQuick, ability_id: 1070, general_id: 3696, avail: None },
    FunctionDef { id: 401, name: "Research_PsiStorm_quick", ftype: FunctionType::CmdQuick, ability_id: 1126, general_id: 0, avail: None },
    FunctionDef { id: 402, name: "Research_RavenCorvidReactor_quick", ftype: FunctionType::CmdQuick, ability_id: 793, general_id: 0, avail: None },
    FunctionDef { id: 403, name: "Research_RavenRecalibratedExplosives_quick", ftype: FunctionType::CmdQuick, ability_id: 803, general_id: 0, avail: None },
    FunctionDef { id: 404, name: "Research_ShadowStrike_quick", ftype: FunctionType::CmdQuick, ability_id: 2720, general_id: 0, avail: None },
    FunctionDef { id: 373, name: "Research_SmartServos_quick", ftype: FunctionType::CmdQuick, ability_id: 766, general_id: 0, avail: None },
    FunctionDef { id: 405, name: "Research_Stimpack_quick", ftype: FunctionType::CmdQuick, ability_id: 730, general_id: 0, avail: None },
    FunctionDef { id: 406, name: "Research_TerranInfantryArmor_quick", ftype: FunctionType::CmdQuick, ability_id: 3697, general_id: 0, avail: None },
    FunctionDef { id: 407, name: "Research_TerranInfantryArmorLevel1_quick", ftype: FunctionType::CmdQuick, ability_id: 656, general_id: 3697, avail: None },
    FunctionDef { id: 408, name: "Research_TerranInfantryArmorLevel2_quick", ftype: FunctionType::CmdQuick, ability_id: 657, general_id: 3697, avail: None },
    FunctionDef { id: 409, name: "Research_TerranInfantryArmorLevel3_quick", ftype: FunctionType::CmdQuick, ability_id: 658, general_id: 3697, avail: None },
    FunctionDef { id: 410, name: "Research_TerranInfantryWeapons_quick", ftype: FunctionType::CmdQuick, ability_id: 3698, general_id: 0, avail: None },
    FunctionDef { id: 411, name: "Research_TerranInfantryWeaponsLevel1_quick", ftype: FunctionType::CmdQuick, ability_id: 652, general_id: 3698, avail: None },
    FunctionDef { id: 412, name: "Research_TerranInfantryWeaponsLevel2_quick", ftype: FunctionType::CmdQuick, ability_id: 653, general_id: 3698, avail: None },
    FunctionDef { id: 413, name: "Research_TerranInfantryWeaponsLevel3_quick", ftype: FunctionType::CmdQuick, ability_id: 654, general_id: 3698, avail: None },
    FunctionDef { id: 414, name: "Research_TerranShipWeapons_quick", ftype: FunctionType::CmdQuick, ability_id: 3699, general_id: 0, avail: None },
    FunctionDef { id: 415, name: "Research_TerranShipWeaponsLevel1_quick", ftype: FunctionType::CmdQuick, ability_id: 861, general_id: 3699, avail: None },
    FunctionDef { id: 416, name: "Research_TerranShipWeaponsLevel2_quick", ftype: FunctionType::CmdQuick, ability_id: 862, general_id: 3699, avail: None },
    FunctionDef { id: 417, name: "Research_TerranShipWeaponsLevel3_quick", ftype: FunctionType::CmdQuick, ability_id: 863, general_id: 3699, avail: None },
    FunctionDef { id: 418, name: "Research_TerranStructureArmorUpgrade_quick", ftype: FunctionType::CmdQuick, ability_id: 651, general_id: 0, avail: None },
    FunctionDef { id: 419, name: "Research_TerranVehicleAndShipPlating_quick", ftype: FunctionType::CmdQuick, ability_id: 3700, general_id: 0, avail: None },
    FunctionDef { id: 420, name: "Research_TerranVehicleAndShipPlatingLevel1_quick", ftype: FunctionType::CmdQuick, ability_id: 864, general_id: 3700, avail: None },
    FunctionDef { id: 421, name: "Research_TerranVehicleAndShipPlatingLevel2_quick", ftype: FunctionType::CmdQuick, ability_id: 865, general_id: 3700, avail: None },
    FunctionDef { id: 422, name: "Research_TerranVehicleAndShipPlatingLevel3_quick", ftype: FunctionType::CmdQuick, ability_id: 866, general_id: 3700, avail: None },
    FunctionDef { id: 423, name: "Research_TerranVehicleWeapons_quick", ftype: FunctionType::CmdQuick, ability_id: 3701, general_id: 0, avail: None },
    FunctionDef { id: 424, name: "Research_TerranVehicleWeaponsLevel1_quick", ftype: FunctionType::CmdQuick, ability_id: 855, general_id: 3701, avail: None },
    FunctionDef { id: 425, name: "Research_TerranVehicleWeaponsLevel2_quick", ftype: FunctionType::CmdQuick, ability_id: 856, general_id: 3701, avail: None },
    FunctionDef { id: 426, name: "Research_TerranVehicleWeaponsLevel3_quick", ftype: FunctionType::CmdQuick, ability_id: 857, general_id: 3701, avail: None },
    FunctionDef { id: 427, name: "Research_TunnelingClaws_quick", ftype: FunctionType::CmdQuick, ability_id: 217, general_id: 0, avail: None },
    FunctionDef { id: 428, name: "Research_WarpGate_quick", ftype: FunctionType::CmdQuick, ability_id: 1568, general_id: 0, avail: None },
    FunctionDef { id: 429, name: "Research_ZergFlyerArmor_quick", ftype: FunctionType::CmdQuick, ability_id: 3702, general_id: 0, avail: None },
    FunctionDef { id: 430, name: "Research_ZergFlyerArmorLevel1_quick", ftype: FunctionType::CmdQuick, ability_id: 1315, general_id: 3702, avail: None },
    FunctionDef { id: 431, name: "Research_ZergFlyerArmorLevel2_quick", ftype: FunctionType::CmdQuick, ability_id: 1316, general_id: 3702, avail: None },
    FunctionDef { id: 432, name: "Research_ZergFlyerArmorLevel3_quick", ftype: FunctionType::CmdQuick, ability_id: 1317, general_id: 3702, avail: None },
    FunctionDef { id: 433, name: "Research_ZergFlyerAttack_quick", ftype: FunctionType::CmdQuick, ability_id: 3703, general_id: 0, avail: None },
    FunctionDef { id: 434, name: "Research_ZergFlyerAttackLevel1_quick", ftype: FunctionType::CmdQuick, ability_id: 1312, general_id: 3703, avail: None },
    FunctionDef { id: 435, name: "Research_ZergFlyerAttackLevel2_quick", ftype: FunctionType::CmdQuick, ability_id: 1313, general_id: 3703, avail: None },
    FunctionDef { id: 436, name: "Research_ZergFlyerAttackLevel3_quick", ftype: FunctionType::CmdQuick, ability_id: 1314, general_id: 3703, avail: None },
    FunctionDef { id: 437, name: "Research_ZergGroundArmor_quick", ftype: FunctionType::CmdQuick, ability_id: 3704, general_id: 0, avail: None },
    FunctionDef { id: 438, name: "Research_ZergGroundArmorLevel1_quick", ftype: FunctionType::CmdQuick, ability_id: 1189, general_id: 3704, avail: None },
    FunctionDef { id: 439, name: "Research_ZergGroundArmorLevel2_quick", ftype: FunctionType::CmdQuick, ability_id: 1190, general_id: 3704, avail: None },
    FunctionDef { id: 440, name: "Research_ZergGroundArmorLevel3_quick", ftype: FunctionType::CmdQuick, ability_id: 1191, general_id: 3704, avail: None },
    FunctionDef { id: 441, name: "Research_ZergMeleeWeapons_quick", ftype: FunctionType::CmdQuick, ability_id: 3705, general_id: 0, avail: None },
    FunctionDef { id: 442, name: "Research_ZergMeleeWeaponsLevel1_quick", ftype: FunctionType::CmdQuick, ability_id: 1186, general_id: 3705, avail: None },
    FunctionDef { id: 443, name: "Research_ZergMeleeWeaponsLevel2_quick", ftype: FunctionType::CmdQuick, ability_id: 1187, general_id: 3705, avail: None },
    FunctionDef { id: 444, name: "Research_ZergMeleeWeaponsLevel3_quick", ftype: FunctionType::CmdQuick, ability_id: 1188, general_id: 3705, avail: None },
    FunctionDef { id: 445, name: "Research_ZergMissileWeapons_quick", ftype: FunctionType::CmdQuick, ability_id: 3706, general_id: 0, avail: None },
    FunctionDef { id: 446, name: "Research_ZergMissileWeaponsLevel1_quick", ftype: FunctionType::CmdQuick, ability_id: 1192, general_id: 3706, avail: None },
    FunctionDef { id: 447, name: "Research_ZergMissileWeaponsLevel2_quick", ftype: FunctionType::CmdQuick, ability_id: 1193, general_id: 3706, avail: None },
    FunctionDef { id: 448, name: "Research_ZergMissileWeaponsLevel3_quick", ftype: FunctionType::CmdQuick, ability_id: 1194, general_id: 3706, avail: None },
    FunctionDef { id: 449, name: "Research_ZerglingAdrenalGlands_quick", ftype: FunctionType::CmdQuick, ability_id: 1252, general_id: 0, avail: None },
    FunctionDef { id: 450, name: "Research_ZerglingMetabolicBoost_quick", ftype: FunctionType::CmdQuick, ability_id: 1253, general_id: 0, avail: None },
    FunctionDef { id: 451, name: "Smart_screen", ftype: FunctionType::CmdScreen, ability_id: 1, general_id: 0, avail: None },
    FunctionDef { id: 452, name: "Smart_minimap", ftype: FunctionType::CmdMinimap, ability_id: 1, general_id: 0, avail: None },
    FunctionDef { id: 453, name: "Stop_quick", ftype: FunctionType::CmdQuick, ability_id: 3665, general_id: 0, avail: None },
    FunctionDef { id: 571, name: "Stop_Battlecruiser_quick", ftype: FunctionType::CmdQuick, ability_id: 3783, general_id: 3665, avail: None },
    FunctionDef { id: 454, name: "Stop_Building_quick", ftype: FunctionType::CmdQuick, ability_id: 2057, general_id: 3665, avail: None },
    FunctionDef { id: 455, name: "Stop_Redirect_quick", ftype: FunctionType::CmdQuick, ability_id: 1691, general_id: 3665, avail: None },
    FunctionDef { id: 456, name: "Stop_Stop_quick", ftype: FunctionType::CmdQuick, ability_id: 4, general_id: 3665, avail: None },
    FunctionDef { id: 457, name: "Train_Adept_quick", ftype: FunctionType::CmdQuick, ability_id: 922, general_id: 0, avail: None },
    FunctionDef { id: 458, name: "Train_Baneling_quick", ftype: FunctionType::CmdQuick, ability_id: 80, general_id: 0, avail: None },
    FunctionDef { id: 459, name: "Train_Banshee_quick", ftype: FunctionType::CmdQuick, ability_id: 621, general_id: 0, avail: None },
    FunctionDef { id: 460, name: "Train_Battlecruiser_quick", ftype: FunctionType::CmdQuick, ability_id: 623, general_id: 0, avail: None },
    FunctionDef { id: 461, name: "Train_Carrier_quick", ftype: FunctionType::CmdQuick, ability_id: 948, general_id: 0, avail: None },
    FunctionDef { id: 462, name: "Train_Colossus_quick", ftype: FunctionType::CmdQuick, ability_id: 978, general_id: 0, avail: None },
    FunctionDef { id: 463, name: "Train_Corruptor_quick", ftype: FunctionType::CmdQuick, ability_id: 1353, general_id: 0, avail: None },
    FunctionDef { id: 464, name: "Train_Cyclone_quick", ftype: FunctionType::CmdQuick, ability_id: 597, general_id: 0, avail: None },
    FunctionDef { id: 465, name: "Train_DarkTemplar_quick", ftype: FunctionType::CmdQuick, ability_id: 920, general_id: 0, avail: None },
    FunctionDef { id: 466, name: "Train_Disruptor_quick", ftype: FunctionType::CmdQuick, ability_id: 994, general_id: 0, avail: None },
    FunctionDef { id: 467, name: "Train_Drone_quick", ftype: FunctionType::CmdQuick, ability_id: 1342, general_id: 0, avail: None },
    FunctionDef { id: 468, name: "Train_Ghost_quick", ftype: FunctionType::CmdQuick, ability_id: 562, general_id: 0, avail: None },
    FunctionDef { id: 469, name: "Train_Hellbat_quick", ftype: FunctionType::CmdQuick, ability_id: 596, general_id: 0, avail: None },
    FunctionDef { id: 470, name: "Train_Hellion_quick", ftype: FunctionType::CmdQuick, ability_id: 595, general_id: 0, avail: None },
    FunctionDef { id: 471, name: "Train_HighTemplar_quick", ftype: FunctionType::CmdQuick, ability_id: 919, general_id: 0, avail: None },
    FunctionDef { id: 472, name: "Train_Hydralisk_quick", ftype: FunctionType::CmdQuick, ability_id: 1345, general_id: 0, avail: None },
    FunctionDef { id: 473, name: "Train_Immortal_quick", ftype: FunctionType::CmdQuick, ability_id: 979, general_id: 0, avail: None },
    FunctionDef { id: 474, name: "Train_Infestor_quick", ftype: FunctionType::CmdQuick, ability_id: 1352, general_id: 0, avail: None },
    FunctionDef { id: 475, name: "Train_Liberator_quick", ftype: FunctionType::CmdQuick, ability_id: 626, general_id: 0, avail: None },
    FunctionDef { id: 476, name: "Train_Marauder_quick", ftype: FunctionType::CmdQuick, ability_id: 563, general_id: 0, avail: None },
    FunctionDef { id: 477, name: "Train_Marine_quick", ftype: FunctionType::CmdQuick, ability_id: 560, general_id: 0, avail: None },
    FunctionDef { id: 478, name: "Train_Medivac_quick", ftype: FunctionType::CmdQuick, ability_id: 620, general_id: 0, avail: None },
    FunctionDef { id: 541, name: "Train_Mothership_quick", ftype: FunctionType::CmdQuick, ability_id: 110, general_id: 0, avail: None },
    FunctionDef { id: 479, name: "Train_MothershipCore_quick", ftype: FunctionType::CmdQuick, ability_id: 1853, general_id: 0, avail: None },
    FunctionDef { id: 480, name: "Train_Mutalisk_quick", ftype: FunctionType::CmdQuick, ability_id: 1346, general_id: 0, avail: None },
    FunctionDef { id: 481, name: "Train_Observer_quick", ftype: FunctionType::CmdQuick, ability_id: 977, general_id: 0, avail: None },
    FunctionDef { id: 482, name: "Train_Oracle_quick", ftype: FunctionType::CmdQuick, ability_id: 954, general_id: 0, avail: None },
    FunctionDef { id: 483, name: "Train_Overlord_quick", ftype: FunctionType::CmdQuick, ability_id: 1344, general_id: 0, avail: None },
    FunctionDef { id: 484, name: "Train_Phoenix_quick", ftype: FunctionType::CmdQuick, ability_id: 946, general_id: 0, avail: None },
    FunctionDef { id: 485, name: "Train_Probe_quick", ftype: FunctionType::CmdQuick, ability_id: 1006, general_id: 0, avail: None },
    FunctionDef { id: 486, name: "Train_Queen_quick", ftype: FunctionType::CmdQuick, ability_id: 1632, general_id: 0, avail: None },
    FunctionDef { id: 487, name: "Train_Raven_quick", ftype: FunctionType::CmdQuick, ability_id: 622, general_id: 0, avail: None },
    FunctionDef { id: 488, name: "Train_Reaper_quick", ftype: FunctionType::CmdQuick, ability_id: 561, general_id: 0, avail: None },
    FunctionDef { id: 489, name: "Train_Roach_quick", ftype: FunctionType::CmdQuick, ability_id: 1351, general_id: 0, avail: None },
    FunctionDef { id: 490, name: "Train_SCV_quick", ftype: FunctionType::CmdQuick, ability_id: 524, general_id: 0, avail: None },
    FunctionDef { id: 491, name: "Train_Sentry_quick", ftype: FunctionType::CmdQuick, ability_id: 921, general_id: 0, avail: None },
    FunctionDef { id: 492, name: "Train_SiegeTank_quick", ftype: FunctionType::CmdQuick, ability_id: 591, general_id: 0, avail: None },
    FunctionDef { id: 493, name: "Train_Stalker_quick", ftype: FunctionType::CmdQuick, ability_id: 917, general_id: 0, avail: None },
    FunctionDef { id: 494, name: "Train_SwarmHost_quick", ftype: FunctionType::CmdQuick, ability_id: 1356, general_id: 0, avail: None },
    FunctionDef { id: 495, name: "Train_Tempest_quick", ftype: FunctionType::CmdQuick, ability_id: 955, general_id: 0, avail: None },
    FunctionDef { id: 496, name: "Train_Thor_quick", ftype: FunctionType::CmdQuick, ability_id: 594, general_id: 0, avail: None },
    FunctionDef { id: 497, name: "Train_Ultralisk_quick", ftype: FunctionType::CmdQuick, ability_id: 1348, general_id: 0, avail: None },
    FunctionDef { id: 498, name: "Train_VikingFighter_quick", ftype: FunctionType::CmdQuick, ability_id: 624, general_id: 0, avail: None },
    FunctionDef { id: 499, name: "Train_Viper_quick", ftype: FunctionType::CmdQuick, ability_id: 1354, general_id: 0, avail: None },
    FunctionDef { id: 500, name: "Train_VoidRay_quick", ftype: FunctionType::CmdQuick, ability_id: 950, general_id: 0, avail: None },
    FunctionDef { id: 501, name: "Train_WarpPrism_quick", ftype: FunctionType::CmdQuick, ability_id: 976, general_id: 0, avail: None },
    FunctionDef { id: 502, name: "Train_WidowMine_quick", ftype: FunctionType::CmdQuick, ability_id: 614, general_id: 0, avail: None },
    FunctionDef { id: 503, name: "Train_Zealot_quick", ftype: FunctionType::CmdQuick, ability_id: 916, general_id: 0, avail: None },
    FunctionDef { id: 504, name: "Train_Zergling_quick", ftype: FunctionType::CmdQuick, ability_id: 1343, general_id: 0, avail: None },
    FunctionDef { id: 505, name: "TrainWarp_Adept_screen", ftype: FunctionType::CmdScreen, ability_id: 1419, general_id: 0, avail: None },
    FunctionDef { id: 506, name: "TrainWarp_DarkTemplar_screen", ftype: FunctionType::CmdScreen, ability_id: 1417, general_id: 0, avail: None },
    FunctionDef { id: 507, name: "TrainWarp_HighTemplar_screen", ftype: FunctionType::CmdScreen, ability_id: 1416, general_id: 0, avail: None },
    FunctionDef { id: 508, name: "TrainWarp_Sentry_screen", ftype: FunctionType::CmdScreen, ability_id: 1418, general_id: 0, avail: None },
    FunctionDef { id: 509, name: "TrainWarp_Stalker_screen", ftype: FunctionType::CmdScreen, ability_id: 1414, general_id: 0, avail: None },
    FunctionDef { id: 510, name: "TrainWarp_Zealot_screen", ftype: FunctionType::CmdScreen, ability_id: 1413, general_id: 0, avail: None },
    FunctionDef { id: 511, name: "UnloadAll_quick", ftype: FunctionType::CmdQuick, ability_id: 3664, general_id: 0, avail: None },
    FunctionDef { id: 512, name: "UnloadAll_Bunker_quick", ftype: FunctionType::CmdQuick, ability_id: 408, general_id: 3664, avail: None },
    FunctionDef { id: 513, name: "UnloadAll_CommandCenter_quick", ftype: FunctionType::CmdQuick, ability_id: 413, general_id: 3664, avail: None },
    FunctionDef { id: 514, name: "UnloadAll_NydusNetwork_quick", ftype: FunctionType::CmdQuick, ability_id: 1438, general_id: 3664, avail: None },
    FunctionDef { id: 515, name: "UnloadAll_NydusWorm_quick", ftype: FunctionType::CmdQuick, ability_id: 2371, general_id: 3664, avail: None },
    FunctionDef { id: 516, name: "UnloadAllAt_screen", ftype: FunctionType::CmdScreen, ability_id: 3669, general_id: 0, avail: None },
    FunctionDef { id: 517, name: "UnloadAllAt_minimap", ftype: FunctionType::CmdMinimap, ability_id: 3669, general_id: 0, avail: None },
    FunctionDef { id: 518, name: "UnloadAllAt_Medivac_screen", ftype: FunctionType::CmdScreen, ability_id: 396, general_id: 3669, avail: None },
    FunctionDef { id: 519, name: "UnloadAllAt_Medivac_minimap", ftype: FunctionType::CmdMinimap, ability_id: 396, general_id: 3669, avail: None },
    FunctionDef { id: 520, name: "UnloadAllAt_Overlord_screen", ftype: FunctionType::CmdScreen, ability_id: 1408, general_id: 3669, avail: None },
    FunctionDef { id: 521, name: "UnloadAllAt_Overlord_minimap", ftype: FunctionType::CmdMinimap, ability_id: 1408, general_id: 3669, avail: None },
    FunctionDef { id: 522, name: "UnloadAllAt_WarpPrism_screen", ftype: FunctionType::CmdScreen, ability_id: 913, general_id: 3669, avail: None },
    FunctionDef { id: 523, name: "UnloadAllAt_WarpPrism_minimap", ftype: FunctionType::CmdMinimap, ability_id: 913, general_id: 3669, avail: None },
];

/// Function definitions for the raw (unit-tag, world-coordinate) interface.
#[rustfmt::skip]
pub const RAW_FUNCTIONS: &[FunctionDef] = &[
    FunctionDef { id: 0, name: "no_op", ftype: FunctionType::RawNoOp, ability_id: 0, general_id: 0, avail: Some(UiAvailability::Always) },
    FunctionDef { id: 168, name: "raw_move_camera", ftype: FunctionType::RawMoveCamera, ability_id: 0, general_id: 0, avail: Some(UiAvailability::Always) },
    FunctionDef { id: 2, name: "Attack_pt", ftype: FunctionType::RawCmdPt, ability_id: 3674, general_id: 0, avail: None },
    FunctionDef { id: 3, name: "Attack_unit", ftype: FunctionType::RawCmdUnit, ability_id: 3674, general_id: 0, avail: None },
    FunctionDef { id: 4, name: "Attack_Attack_pt", ftype: FunctionType::RawCmdPt, ability_id: 23, general_id: 3674, avail: None },
    FunctionDef { id: 6, name: "Attack_AttackBuilding_pt", ftype: FunctionType::RawCmdPt, ability_id: 2048, general_id: 3674, avail: None },
    FunctionDef { id: 5, name: "Attack_Attack_unit", ftype: FunctionType::RawCmdUnit, ability_id: 23, general_id: 3674, avail: None },
    FunctionDef { id: 7, name: "Attack_AttackBuilding_unit", ftype: FunctionType::RawCmdUnit, ability_id: 2048, general_id: 3674, avail: None },
    FunctionDef { id: 539, name: "Attack_Battlecruiser_pt", ftype: FunctionType::RawCmdPt, ability_id: 3771, general_id: 3674, avail: None },
    FunctionDef { id: 540, name: "Attack_Battlecruiser_unit", ftype: FunctionType::RawCmdUnit, ability_id: 3771, general_id: 3674, avail: None },
    FunctionDef { id: 8, name: "Attack_Redirect_pt", ftype: FunctionType::RawCmdPt, ability_id: 1682, general_id: 3674, avail: None },
    FunctionDef { id: 9, name: "Attack_Redirect_unit", ftype: FunctionType::RawCmdUnit, ability_id: 1682, general_id: 3674, avail: None },
    FunctionDef { id: 88, name: "Behavior_BuildingAttackOff_quick", ftype: FunctionType::RawCmd, ability_id: 2082, general_id: 0, avail: None },
    FunctionDef { id: 87, name: "Behavior_BuildingAttackOn_quick", ftype: FunctionType::RawCmd, ability_id: 2081, general_id: 0, avail: None },
    FunctionDef { id: 169, name: "Behavior_CloakOff_quick", ftype: FunctionType::RawCmd, ability_id: 3677, general_id: 0, avail: None },
    FunctionDef { id: 170, name: "Behavior_CloakOff_Banshee_quick", ftype: FunctionType::RawCmd, ability_id: 393, general_id: 3677, avail: None },
    FunctionDef { id: 171, name: "Behavior_CloakOff_Ghost_quick", ftype: FunctionType::RawCmd, ability_id: 383, general_id: 3677, avail: None },
    FunctionDef { id: 172, name: "Behavior_CloakOn_quick", ftype: FunctionType::RawCmd, ability_id: 3676, general_id: 0, avail: None },
    FunctionDef { id: 173, name: "Behavior_CloakOn_Banshee_quick", ftype: FunctionType::RawCmd, ability_id: 392, general_id: 3676, avail: None },
    FunctionDef { id: 174, name: "Behavior_CloakOn_Ghost_quick", ftype: FunctionType::RawCmd, ability_id: 382, general_id: 3676, avail: None },
    FunctionDef { id: 175, name: "Behavior_GenerateCreepOff_quick", ftype: FunctionType::RawCmd, ability_id: 1693, general_id: 0, avail: None },
    FunctionDef { id: 176, name: "Behavior_GenerateCreepOn_quick", ftype: FunctionType::RawCmd, ability_id: 1692, general_id: 0, avail: None },
    FunctionDef { id: 178, name: "Behavior_HoldFireOff_Ghost_quick", ftype: FunctionType::RawCmd, ability_id: 38, general_id: 3689, avail: None },
    FunctionDef { id: 179, name: "Behavior_HoldFireOff_Lurker_quick", ftype: FunctionType::RawCmd, ability_id: 2552, general_id: 3689, avail: None },
    FunctionDef { id: 177, name: "Behavior_HoldFireOff_quick", ftype: FunctionType::RawCmd, ability_id: 3689, general_id: 0, avail: None },
    FunctionDef { id: 181, name: "Behavior_HoldFireOn_Ghost_quick", ftype: FunctionType::RawCmd, ability_id: 36, general_id: 3688, avail: None },
    FunctionDef { id: 182, name: "Behavior_HoldFireOn_Lurker_quick", ftype: FunctionType::RawCmd, ability_id: 2550, general_id: 3688, avail: None },
    FunctionDef { id: 180, name: "Behavior_HoldFireOn_quick", ftype: FunctionType::RawCmd, ability_id: 3688, general_id: 0, avail: None },
    FunctionDef { id: 158, name: "Behavior_PulsarBeamOff_quick", ftype: FunctionType::RawCmd, ability_id: 2376, general_id: 0, avail: None },
    FunctionDef { id: 159, name: "Behavior_PulsarBeamOn_quick", ftype: FunctionType::RawCmd, ability_id: 2375, general_id: 0, avail: None },
    FunctionDef { id: 183, name: "Build_Armory_pt", ftype: FunctionType::RawCmdPt, ability_id: 331, general_id: 0, avail: None },
    FunctionDef { id: 36, name: "Build_Assimilator_unit", ftype: FunctionType::RawCmdUnit, ability_id: 882, general_id: 0, avail: None },
    FunctionDef { id: 184, name: "Build_BanelingNest_pt", ftype: FunctionType::RawCmdPt, ability_id: 1162, general_id: 0, avail: None },
    FunctionDef { id: 185, name: "Build_Barracks_pt", ftype: FunctionType::RawCmdPt, ability_id: 321, general_id: 0, avail: None },
    FunctionDef { id: 186, name: "Build_Bunker_pt", ftype: FunctionType::RawCmdPt, ability_id: 324, general_id: 0, avail: None },
    FunctionDef { id: 187, name: "Build_CommandCenter_pt", ftype: FunctionType::RawCmdPt, ability_id: 318, general_id: 0, avail: None },
    FunctionDef { id: 188, name: "Build_CreepTumor_pt", ftype: FunctionType::RawCmdPt, ability_id: 3691, general_id: 0, avail: None },
    FunctionDef { id: 189, name: "Build_CreepTumor_Queen_pt", ftype: FunctionType::RawCmdPt, ability_id: 1694, general_id: 3691, avail: None },
    FunctionDef { id: 190, name: "Build_CreepTumor_Tumor_pt", ftype: FunctionType::RawCmdPt, ability_id: 1733, general_id: 3691, avail: None },
    FunctionDef { id: 47, name: "Build_CyberneticsCore_pt", ftype: FunctionType::RawCmdPt, ability_id: 894, general_id: 0, avail: None },
    FunctionDef { id: 44, name: "Build_DarkShrine_pt", ftype: FunctionType::RawCmdPt, ability_id: 891, general_id: 0, avail: None },
    FunctionDef { id: 191, name: "Build_EngineeringBay_pt", ftype: FunctionType::RawCmdPt, ability_id: 322, general_id: 0, avail: None },
    FunctionDef { id: 192, name: "Build_EvolutionChamber_pt", ftype: FunctionType::RawCmdPt, ability_id: 1156, general_id: 0, avail: None },
    FunctionDef { id: 193, name: "Build_Extractor_unit", ftype: FunctionType::RawCmdUnit, ability_id: 1154, general_id: 0, avail: None },
    FunctionDef { id: 194, name: "Build_Factory_pt", ftype: FunctionType::RawCmdPt, ability_id: 328, general_id: 0, avail: None },
    FunctionDef { id: 39, name: "Build_FleetBeacon_pt", ftype: FunctionType::RawCmdPt, ability_id: 885, general_id: 0, avail: None },
    FunctionDef { id: 38, name: "Build_Forge_pt", ftype: FunctionType::RawCmdPt, ability_id: 884, general_id: 0, avail: None },
    FunctionDef { id: 195, name: "Build_FusionCore_pt", ftype: FunctionType::RawCmdPt, ability_id: 333, general_id: 0, avail: None },
    FunctionDef { id: 37, name: "Build_Gateway_pt", ftype: FunctionType::RawCmdPt, ability_id: 883, general_id: 0, avail: None },
    FunctionDef { id: 196, name: "Build_GhostAcademy_pt", ftype: FunctionType::RawCmdPt, ability_id: 327, general_id: 0, avail: None },
    FunctionDef { id: 197, name: "Build_Hatchery_pt", ftype: FunctionType::RawCmdPt, ability_id: 1152, general_id: 0, avail: None },
    FunctionDef { id: 198, name: "Build_HydraliskDen_pt", ftype: FunctionType::RawCmdPt, ability_id: 1157, general_id: 0, avail: None },
    FunctionDef { id: 199, name: "Build_InfestationPit_pt", ftype: FunctionType::RawCmdPt, ability_id: 1160, general_id: 0, avail: None },
    FunctionDef { id: 200, name: "Build_Interceptors_autocast", ftype: FunctionType::RawAutocast, ability_id: 1042, general_id: 0, avail: None },
    FunctionDef { id: 66, name: "Build_Interceptors_quick", ftype: FunctionType::RawCmd, ability_id: 1042, general_id: 0, avail: None },
    FunctionDef { id: 201, name: "Build_LurkerDen_pt", ftype: FunctionType::RawCmdPt, ability_id: 1163, general_id: 0, avail: None },
    FunctionDef { id: 202, name: "Build_MissileTurret_pt", ftype: FunctionType::RawCmdPt, ability_id: 323, general_id: 0, avail: None },
    FunctionDef { id: 34, name: "Build_Nexus_pt", ftype: FunctionType::RawCmdPt, ability_id: 880, general_id: 0, avail: None },
    FunctionDef { id: 203, name: "Build_Nuke_quick", ftype: FunctionType::RawCmd, ability_id: 710, general_id: 0, avail: None },
    FunctionDef { id: 204, name: "Build_NydusNetwork_pt", ftype: FunctionType::RawCmdPt, ability_id: 1161, general_id: 0, avail: None },
    FunctionDef { id: 205, name: "Build_NydusWorm_pt", ftype: FunctionType::RawCmdPt, ability_id: 1768, general_id: 0, avail: None },
    FunctionDef { id: 41, name: "Build_PhotonCannon_pt", ftype: FunctionType::RawCmdPt, ability_id: 887, general_id: 0, avail: None },
    FunctionDef { id: 35, name: "Build_Pylon_pt", ftype: FunctionType::RawCmdPt, ability_id: 881, general_id: 0, avail: None },
    FunctionDef { id: 207, name: "Build_Reactor_pt", ftype: FunctionType::RawCmdPt, ability_id: 3683, general_id: 0, avail: None },
    FunctionDef { id: 206, name: "Build_Reactor_quick", ftype: FunctionType::RawCmd, ability_id: 3683, general_id: 0, avail: None },
    FunctionDef { id: 209, name: "Build_Reactor_Barracks_pt", ftype: FunctionType::RawCmdPt, ability_id: 422, general_id: 3683, avail: None },
    FunctionDef { id: 208, name: "Build_Reactor_Barracks_quick", ftype: FunctionType::RawCmd, ability_id: 422, general_id: 3683, avail: None },
    FunctionDef { id: 211, name: "Build_Reactor_Factory_pt", ftype: FunctionType::RawCmdPt, ability_id: 455, general_id: 3683, avail: None },
    FunctionDef { id: 210, name: "Build_Reactor_Factory_quick", ftype: FunctionType::RawCmd, ability_id: 455, general_id: 3683, avail: None },
    FunctionDef { id: 213, name: "Build_Reactor_Starport_pt", ftype: FunctionType::RawCmdPt, ability_id: 488, general_id: 3683, avail: None },
    FunctionDef { id: 212, name: "Build_Reactor_Starport_quick", ftype: FunctionType::RawCmd, ability_id: 488, general_id: 3683, avail: None },
    FunctionDef { id: 214, name: "Build_Refinery_pt", ftype: FunctionType::RawCmdUnit, ability_id: 320, general_id: 0, avail: None },
    FunctionDef { id: 215, name: "Build_RoachWarren_pt", ftype: FunctionType::RawCmdPt, ability_id: 1165, general_id: 0, avail: None },
    FunctionDef { id: 45, name: "Build_RoboticsBay_pt", ftype: FunctionType::RawCmdPt, ability_id: 892, general_id: 0, avail: None },
    FunctionDef { id: 46, name: "Build_RoboticsFacility_pt", ftype: FunctionType::RawCmdPt, ability_id: 893, general_id: 0, avail: None },
    FunctionDef { id: 216, name: "Build_SensorTower_pt", ftype: FunctionType::RawCmdPt, ability_id: 326, general_id: 0, avail: None },
    FunctionDef { id: 48, name: "Build_ShieldBattery_pt", ftype: FunctionType::RawCmdPt, ability_id: 895, general_id: 0, avail: None },
    FunctionDef { id: 217, name: "Build_SpawningPool_pt", ftype: FunctionType::RawCmdPt, ability_id: 1155, general_id: 0, avail: None },
    FunctionDef { id: 218, name: "Build_SpineCrawler_pt", ftype: FunctionType::RawCmdPt, ability_id: 1166, general_id: 0, avail: None },
    FunctionDef { id: 219, name: "Build_Spire_pt", ftype: FunctionType::RawCmdPt, ability_id: 1158, general_id: 0, avail: None },
    FunctionDef { id: 220, name: "Build_SporeCrawler_pt", ftype: FunctionType::RawCmdPt, ability_id: 1167, general_id: 0, avail: None },
    FunctionDef { id: 42, name: "Build_Stargate_pt", ftype: FunctionType::RawCmdPt, ability_id: 889, general_id: 0, avail: None },
    FunctionDef { id: 221, name: "Build_Starport_pt", ftype: FunctionType::RawCmdPt, ability_id: 329, general_id: 0, avail: None },
    FunctionDef { id: 95, name: "Build_StasisTrap_pt", ftype: FunctionType::RawCmdPt, ability_id: 2505, general_id: 0, avail: None },
    FunctionDef { id: 222, name: "Build_SupplyDepot_pt", ftype: FunctionType::RawCmdPt, ability_id: 319, general_id: 0, avail: None },
    FunctionDef { id: 224, name: "Build_TechLab_pt", ftype: FunctionType::RawCmdPt, ability_id: 3682, general_id: 0, avail: None },
    FunctionDef { id: 223, name: "Build_TechLab_quick", ftype: FunctionType::RawCmd, ability_id: 3682, general_id: 0, avail: None },
    FunctionDef { id: 226, name: "Build_TechLab_Barracks_pt", ftype: FunctionType::RawCmdPt, ability_id: 421, general_id: 3682, avail: None },
    FunctionDef { id: 225, name: "Build_TechLab_Barracks_quick", ftype: FunctionType::RawCmd, ability_id: 421, general_id: 3682, avail: None },
    FunctionDef { id: 228, name: "Build_TechLab_Factory_pt", ftype: FunctionType::RawCmdPt, ability_id: 454, general_id: 3682, avail: None },
    FunctionDef { id: 227, name: "Build_TechLab_Factory_quick", ftype: FunctionType::RawCmd, ability_id: 454, general_id: 3682, avail: None },
    FunctionDef { id: 230, name: "Build_TechLab_Starport_pt", ftype: FunctionType::RawCmdPt, ability_id: 487, general_id: 3682, avail: None },
    FunctionDef { id: 229, name: "Build_TechLab_Starport_quick", ftype: FunctionType::RawCmd, ability_id: 487, general_id: 3682, avail: None },
    FunctionDef { id: 43, name: "Build_TemplarArchive_pt", ftype: FunctionType::RawCmdPt, ability_id: 890, general_id: 0, avail: None },
    FunctionDef { id: 40, name: "Build_TwilightCouncil_pt", ftype: FunctionType::RawCmdPt, ability_id: 886, general_id: 0, avail: None },
    FunctionDef { id: 231, name: "Build_UltraliskCavern_pt", ftype: FunctionType::RawCmdPt, ability_id: 1159, general_id: 0, avail: None },
    FunctionDef { id: 232, name: "BurrowDown_quick", ftype: FunctionType::RawCmd, ability_id: 3661, general_id: 0, avail: None },
    FunctionDef { id: 233, name: "BurrowDown_Baneling_quick", ftype: FunctionType::RawCmd, ability_id: 1374, general_id: 3661, avail: None },
    FunctionDef { id: 234, name: "BurrowDown_Drone_quick", ftype: FunctionType::RawCmd, ability_id: 1378, general_id: 3661, avail: None },
    FunctionDef { id: 235, name: "BurrowDown_Hydralisk_quick", ftype: FunctionType::RawCmd, ability_id: 1382, general_id: 3661, avail: None },
    FunctionDef { id: 236, name: "BurrowDown_Infestor_quick", ftype: FunctionType::RawCmd, ability_id: 1444, general_id: 3661, avail: None },
    FunctionDef { id: 237, name: "BurrowDown_InfestorTerran_quick", ftype: FunctionType::RawCmd, ability_id: 1394, general_id: 3661, avail: None },
    FunctionDef { id: 238, name: "BurrowDown_Lurker_quick", ftype: FunctionType::RawCmd, ability_id: 2108, general_id: 3661, avail: None },
    FunctionDef { id: 239, name: "BurrowDown_Queen_quick", ftype: FunctionType::RawCmd, ability_id: 1433, general_id: 3661, avail: None },
    FunctionDef { id: 240, name: "BurrowDown_Ravager_quick", ftype: FunctionType::RawCmd, ability_id: 2340, general_id: 3661, avail: None },
    FunctionDef { id: 241, name: "BurrowDown_Roach_quick", ftype: FunctionType::RawCmd, ability_id: 1386, general_id: 3661, avail: None },
    FunctionDef { id: 242, name: "BurrowDown_SwarmHost_quick", ftype: FunctionType::RawCmd, ability_id: 2014, general_id: 3661, avail: None },
    FunctionDef { id: 243, name: "BurrowDown_Ultralisk_quick", ftype: FunctionType::RawCmd, ability_id: 1512, general_id: 3661, avail: None },
    FunctionDef { id: 244, name: "BurrowDown_WidowMine_quick", ftype: FunctionType::RawCmd, ability_id: 2095, general_id: 3661, avail: None },
    FunctionDef { id: 245, name: "BurrowDown_Zergling_quick", ftype: FunctionType::RawCmd, ability_id: 1390, general_id: 3661, avail: None },
    FunctionDef { id: 247, name: "BurrowUp_autocast", ftype: FunctionType::RawAutocast, ability_id: 3662, general_id: 0, avail: None },
    FunctionDef { id: 246, name: "BurrowUp_quick", ftype: FunctionType::RawCmd, ability_id: 3662, general_id: 0, avail: None },
    FunctionDef { id: 249, name: "BurrowUp_Baneling_autocast", ftype: FunctionType::RawAutocast, ability_id: 1376, general_id: 3662, avail: None },
    FunctionDef { id: 248, name: "BurrowUp_Baneling_quick", ftype: FunctionType::RawCmd, ability_id: 1376, general_id: 3662, avail: None },
    FunctionDef { id: 250, name: "BurrowUp_Drone_quick", ftype: FunctionType::RawCmd, ability_id: 1380, general_id: 3662, avail: None },
    FunctionDef { id: 252, name: "BurrowUp_Hydralisk_autocast", ftype: FunctionType::RawAutocast, ability_id: 1384, general_id: 3662, avail: None },
    FunctionDef { id: 251, name: "BurrowUp_Hydralisk_quick", ftype: FunctionType::RawCmd, ability_id: 1384, general_id: 3662, avail: None },
    FunctionDef { id: 253, name: "BurrowUp_Infestor_quick", ftype: FunctionType::RawCmd, ability_id: 1446, general_id: 3662, avail: None },
    FunctionDef { id: 255, name: "BurrowUp_InfestorTerran_autocast", ftype: FunctionType::RawAutocast, ability_id: 1396, general_id: 3662, avail: None },
    FunctionDef { id: 254, name: "BurrowUp_InfestorTerran_quick", ftype: FunctionType::RawCmd, ability_id: 1396, general_id: 3662, avail: None },
    FunctionDef { id: 256, name: "BurrowUp_Lurker_quick", ftype: FunctionType::RawCmd, ability_id: 2110, general_id: 3662, avail: None },
    FunctionDef { id: 258, name: "BurrowUp_Queen_autocast", ftype: FunctionType::RawAutocast, ability_id: 1435, general_id: 3662, avail: None },
    FunctionDef { id: 257, name: "BurrowUp_Queen_quick", ftype: FunctionType::RawCmd, ability_id: 1435, general_id: 3662, avail: None },
    FunctionDef { id: 260, name: "BurrowUp_Ravager_autocast", ftype: FunctionType::RawAutocast, ability_id: 2342, general_id: 3662, avail: None },
    FunctionDef { id: 259, name: "BurrowUp_Ravager_quick", ftype: FunctionType::RawCmd, ability_id: 2342, general_id: 3662, avail: None },
    FunctionDef { id: 262, name: "BurrowUp_Roach_autocast", ftype: FunctionType::RawAutocast, ability_id: 1388, general_id: 3662, avail: None },
    FunctionDef { id: 261, name: "BurrowUp_Roach_quick", ftype: FunctionType::RawCmd, ability_id: 1388, general_id: 3662, avail: None },
    FunctionDef { id: 263, name: "BurrowUp_SwarmHost_quick", ftype: FunctionType::RawCmd, ability_id: 2016, general_id: 3662, avail: None },
    FunctionDef { id: 265, name: "BurrowUp_Ultralisk_autocast", ftype: FunctionType::RawAutocast, ability_id: 1514, general_id: 3662, avail: None },
    FunctionDef { id: 264, name: "BurrowUp_Ultralisk_quick", ftype: FunctionType::RawCmd, ability_id: 1514, general_id: 3662, avail: None },
    FunctionDef { id: 266, name: "BurrowUp_WidowMine_quick", ftype: FunctionType::RawCmd, ability_id: 2097, general_id: 3662, avail: None },
    FunctionDef { id: 268, name: "BurrowUp_Zergling_autocast", ftype: FunctionType::RawAutocast, ability_id: 1392, general_id: 3662, avail: None },
    FunctionDef { id: 267, name: "BurrowUp_Zergling_quick", ftype: FunctionType::RawCmd, ability_id: 1392, general_id: 3662, avail: None },
    FunctionDef { id: 98, name: "Cancel_quick", ftype: FunctionType::RawCmd, ability_id: 3659, general_id: 0, avail: None },
    FunctionDef { id: 123, name: "Cancel_AdeptPhaseShift_quick", ftype: FunctionType::RawCmd, ability_id: 2594, general_id: 3659, avail: None },
    FunctionDef { id: 124, name: "Cancel_AdeptShadePhaseShift_quick", ftype: FunctionType::RawCmd, ability_id: 2596, general_id: 3659, avail: None },
    FunctionDef { id: 269, name: "Cancel_BarracksAddOn_quick", ftype: FunctionType::RawCmd, ability_id: 451, general_id: 3659, avail: None },
    FunctionDef { id: 125, name: "Cancel_BuildInProgress_quick", ftype: FunctionType::RawCmd, ability_id: 314, general_id: 3659, avail: None },
    FunctionDef { id: 270, name: "Cancel_CreepTumor_quick", ftype: FunctionType::RawCmd, ability_id: 1763, general_id: 3659, avail: None },
    FunctionDef { id: 271, name: "Cancel_FactoryAddOn_quick", ftype: FunctionType::RawCmd, ability_id: 484, general_id: 3659, avail: None },
    FunctionDef { id: 126, name: "Cancel_GravitonBeam_quick", ftype: FunctionType::RawCmd, ability_id: 174, general_id: 3659, avail: None },
    FunctionDef { id: 272, name: "Cancel_HangarQueue5_quick", ftype: FunctionType::RawCmd, ability_id: 1038, general_id: 3671, avail: None },
    FunctionDef { id: 129, name: "Cancel_Last_quick", ftype: FunctionType::RawCmd, ability_id: 3671, general_id: 0, avail: None },
    FunctionDef { id: 273, name: "Cancel_LockOn_quick", ftype: FunctionType::RawCmd, ability_id: 2354, general_id: 3659, avail: None },
    FunctionDef { id: 274, name: "Cancel_MorphBroodlord_quick", ftype: FunctionType::RawCmd, ability_id: 1373, general_id: 3659, avail: None },
    FunctionDef { id: 275, name: "Cancel_MorphGreaterSpire_quick", ftype: FunctionType::RawCmd, ability_id: 1221, general_id: 3659, avail: None },
    FunctionDef { id: 276, name: "Cancel_MorphHive_quick", ftype: FunctionType::RawCmd, ability_id: 1219, general_id: 3659, avail: None },
    FunctionDef { id: 277, name: "Cancel_MorphLair_quick", ftype: FunctionType::RawCmd, ability_id: 1217, general_id: 3659, avail: None },
    FunctionDef { id: 279, name: "Cancel_MorphLurkerDen_quick", ftype: FunctionType::RawCmd, ability_id: 2113, general_id: 3659, avail: None },
    FunctionDef { id: 278, name: "Cancel_MorphLurker_quick", ftype: FunctionType::RawCmd, ability_id: 2333, general_id: 3659, avail: None },
    FunctionDef { id: 280, name: "Cancel_MorphMothership_quick", ftype: FunctionType::RawCmd, ability_id: 1848, general_id: 3659, avail: None },
    FunctionDef { id: 281, name: "Cancel_MorphOrbital_quick", ftype: FunctionType::RawCmd, ability_id: 1517, general_id: 3659, avail: None },
    FunctionDef { id: 282, name: "Cancel_MorphOverlordTransport_quick", ftype: FunctionType::RawCmd, ability_id: 2709, general_id: 3659, avail: None },
    FunctionDef { id: 283, name: "Cancel_MorphOverseer_quick", ftype: FunctionType::RawCmd, ability_id: 1449, general_id: 3659, avail: None },
    FunctionDef { id: 284, name: "Cancel_MorphPlanetaryFortress_quick", ftype: FunctionType::RawCmd, ability_id: 1451, general_id: 3659, avail: None },
    FunctionDef { id: 285, name: "Cancel_MorphRavager_quick", ftype: FunctionType::RawCmd, ability_id: 2331, general_id: 3659, avail: None },
    FunctionDef { id: 286, name: "Cancel_MorphThorExplosiveMode_quick", ftype: FunctionType::RawCmd, ability_id: 2365, general_id: 3659, avail: None },
    FunctionDef { id: 287, name: "Cancel_NeuralParasite_quick", ftype: FunctionType::RawCmd, ability_id: 250, general_id: 3659, avail: None },
    FunctionDef { id: 288, name: "Cancel_Nuke_quick", ftype: FunctionType::RawCmd, ability_id: 1623, general_id: 3659, avail: None },
    FunctionDef { id: 130, name: "Cancel_Queue1_quick", ftype: FunctionType::RawCmd, ability_id: 304, general_id: 3671, avail: None },
    FunctionDef { id: 131, name: "Cancel_Queue5_quick", ftype: FunctionType::RawCmd, ability_id: 306, general_id: 3671, avail: None },
    FunctionDef { id: 289, name: "Cancel_QueueAddOn_quick", ftype: FunctionType::RawCmd, ability_id: 312, general_id: 3671, avail: None },
    FunctionDef { id: 132, name: "Cancel_QueueCancelToSelection_quick", ftype: FunctionType::RawCmd, ability_id: 308, general_id: 3671, avail: None },
    FunctionDef { id: 134, name: "Cancel_QueuePassiveCancelToSelection_quick", ftype: FunctionType::RawCmd, ability_id: 1833, general_id: 3671, avail: None },
    FunctionDef { id: 133, name: "Cancel_QueuePassive_quick", ftype: FunctionType::RawCmd, ability_id: 1831, general_id: 3671, avail: None },
    FunctionDef { id: 290, name: "Cancel_SpineCrawlerRoot_quick", ftype: FunctionType::RawCmd, ability_id: 1730, general_id: 3659, avail: None },
    FunctionDef { id: 291, name: "Cancel_SporeCrawlerRoot_quick", ftype: FunctionType::RawCmd, ability_id: 1732, general_id: 3659, avail: None },
    FunctionDef { id: 292, name: "Cancel_StarportAddOn_quick", ftype: FunctionType::RawCmd, ability_id: 517, general_id: 3659, avail: None },
    FunctionDef { id: 127, name: "Cancel_StasisTrap_quick", ftype: FunctionType::RawCmd, ability_id: 2535, general_id: 3659, avail: None },
    FunctionDef { id: 128, name: "Cancel_VoidRayPrismaticAlignment_quick", ftype: FunctionType::RawCmd, ability_id: 3707, general_id: 3659, avail: None },
    FunctionDef { id: 293, name: "Effect_Abduct_unit", ftype: FunctionType::RawCmdUnit, ability_id: 2067, general_id: 0, avail: None },
    FunctionDef { id: 96, name: "Effect_AdeptPhaseShift_pt", ftype: FunctionType::RawCmdPt, ability_id: 2544, general_id: 0, avail: None },
    FunctionDef { id: 294, name: "Effect_AntiArmorMissile_unit", ftype: FunctionType::RawCmdUnit, ability_id: 3753, general_id: 0, avail: None },
    FunctionDef { id: 295, name: "Effect_AutoTurret_pt", ftype: FunctionType::RawCmdPt, ability_id: 1764, general_id: 0, avail: None },
    FunctionDef { id: 296, name: "Effect_BlindingCloud_pt", ftype: FunctionType::RawCmdPt, ability_id: 2063, general_id: 0, avail: None },
    FunctionDef { id: 111, name: "Effect_Blink_pt", ftype: FunctionType::RawCmdPt, ability_id: 3687, general_id: 0, avail: None },
    FunctionDef { id: 135, name: "Effect_Blink_Stalker_pt", ftype: FunctionType::RawCmdPt, ability_id: 1442, general_id: 3687, avail: None },
    FunctionDef { id: 112, name: "Effect_Blink_unit", ftype: FunctionType::RawCmdUnit, ability_id: 3687, general_id: 0, avail: None },
    FunctionDef { id: 297, name: "Effect_CalldownMULE_pt", ftype: FunctionType::RawCmdPt, ability_id: 171, general_id: 0, avail: None },
    FunctionDef { id: 298, name: "Effect_CalldownMULE_unit", ftype: FunctionType::RawCmdUnit, ability_id: 171, general_id: 0, avail: None },
    FunctionDef { id: 299, name: "Effect_CausticSpray_unit", ftype: FunctionType::RawCmdUnit, ability_id: 2324, general_id: 0, avail: None },
    FunctionDef { id: 302, name: "Effect_Charge_autocast", ftype: FunctionType::RawAutocast, ability_id: 1819, general_id: 0, avail: None },
    FunctionDef { id: 300, name: "Effect_Charge_pt", ftype: FunctionType::RawCmdPt, ability_id: 1819, general_id: 0, avail: None },
    FunctionDef { id: 301, name: "Effect_Charge_unit", ftype: FunctionType::RawCmdUnit, ability_id: 1819, general_id: 0, avail: None },
    FunctionDef { id: 122, name: "Effect_ChronoBoostEnergyCost_unit", ftype: FunctionType::RawCmdUnit, ability_id: 3755, general_id: 0, avail: None },
    FunctionDef { id: 33, name: "Effect_ChronoBoost_unit", ftype: FunctionType::RawCmdUnit, ability_id: 261, general_id: 0, avail: None },
    FunctionDef { id: 303, name: "Effect_Contaminate_unit", ftype: FunctionType::RawCmdUnit, ability_id: 1825, general_id: 0, avail: None },
    FunctionDef { id: 304, name: "Effect_CorrosiveBile_pt", ftype: FunctionType::RawCmdPt, ability_id: 2338, general_id: 0, avail: None },
    FunctionDef { id: 305, name: "Effect_EMP_pt", ftype: FunctionType::RawCmdPt, ability_id: 1628, general_id: 0, avail: None },
    FunctionDef { id: 306, name: "Effect_EMP_unit", ftype: FunctionType::RawCmdUnit, ability_id: 1628, general_id: 0, avail: None },
    FunctionDef { id: 307, name: "Effect_Explode_quick", ftype: FunctionType::RawCmd, ability_id: 42, general_id: 0, avail: None },
    FunctionDef { id: 157, name: "Effect_Feedback_unit", ftype: FunctionType::RawCmdUnit, ability_id: 140, general_id: 0, avail: None },
    FunctionDef { id: 79, name: "Effect_ForceField_pt", ftype: FunctionType::RawCmdPt, ability_id: 1526, general_id: 0, avail: None },
    FunctionDef { id: 308, name: "Effect_FungalGrowth_pt", ftype: FunctionType::RawCmdPt, ability_id: 74, general_id: 0, avail: None },
    FunctionDef { id: 309, name: "Effect_FungalGrowth_unit", ftype: FunctionType::RawCmdUnit, ability_id: 74, general_id: 0, avail: None },
    FunctionDef { id: 310, name: "Effect_GhostSnipe_unit", ftype: FunctionType::RawCmdUnit, ability_id: 2714, general_id: 0, avail: None },
    FunctionDef { id: 32, name: "Effect_GravitonBeam_unit", ftype: FunctionType::RawCmdUnit, ability_id: 173, general_id: 0, avail: None },
    FunctionDef { id: 20, name: "Effect_GuardianShield_quick", ftype: FunctionType::RawCmd, ability_id: 76, general_id: 0, avail: None },
    FunctionDef { id: 312, name: "Effect_Heal_autocast", ftype: FunctionType::RawAutocast, ability_id: 386, general_id: 0, avail: None },
    FunctionDef { id: 311, name: "Effect_Heal_unit", ftype: FunctionType::RawCmdUnit, ability_id: 386, general_id: 0, avail: None },
    FunctionDef { id: 313, name: "Effect_ImmortalBarrier_autocast", ftype: FunctionType::RawAutocast, ability_id: 2328, general_id: 0, avail: None },
    FunctionDef { id: 91, name: "Effect_ImmortalBarrier_quick", ftype: FunctionType::RawCmd, ability_id: 2328, general_id: 0, avail: None },
    FunctionDef { id: 314, name: "Effect_InfestedTerrans_pt", ftype: FunctionType::RawCmdPt, ability_id: 247, general_id: 0, avail: None },
    FunctionDef { id: 315, name: "Effect_InjectLarva_unit", ftype: FunctionType::RawCmdUnit, ability_id: 251, general_id: 0, avail: None },
    FunctionDef { id: 316, name: "Effect_InterferenceMatrix_unit", ftype: FunctionType::RawCmdUnit, ability_id: 3747, general_id: 0, avail: None },
    FunctionDef { id: 317, name: "Effect_KD8Charge_pt", ftype: FunctionType::RawCmdPt, ability_id: 2588, general_id: 0, avail: None },
    FunctionDef { id: 538, name: "Effect_KD8Charge_unit", ftype: FunctionType::RawCmdUnit, ability_id: 2588, general_id: 0, avail: None },
    FunctionDef { id: 318, name: "Effect_LockOn_unit", ftype: FunctionType::RawCmdUnit, ability_id: 2350, general_id: 0, avail: None },
    FunctionDef { id: 541, name: "Effect_LockOn_autocast", ftype: FunctionType::RawAutocast, ability_id: 2350, general_id: 0, avail: None },
    FunctionDef { id: 319, name: "Effect_LocustSwoop_pt", ftype: FunctionType::RawCmdPt, ability_id: 2387, general_id: 0, avail: None },
    FunctionDef { id: 110, name: "Effect_MassRecall_pt", ftype: FunctionType::RawCmdPt, ability_id: 3686, general_id: 0, avail: None },
    FunctionDef { id: 136, name: "Effect_MassRecall_Mothership_pt", ftype: FunctionType::RawCmdPt, ability_id: 2368, general_id: 3686, avail: None },
    FunctionDef { id: 162, name: "Effect_MassRecall_Nexus_pt", ftype: FunctionType::RawCmdPt, ability_id: 3757, general_id: 3686, avail: None },
    FunctionDef { id: 137, name: "Effect_MassRecall_StrategicRecall_pt", ftype: FunctionType::RawCmdPt, ability_id: 142, general_id: 3686, avail: None },
    FunctionDef { id: 320, name: "Effect_MedivacIgniteAfterburners_quick", ftype: FunctionType::RawCmd, ability_id: 2116, general_id: 0, avail: None },
    FunctionDef { id: 321, name: "Effect_NeuralParasite_unit", ftype: FunctionType::RawCmdUnit, ability_id: 249, general_id: 0, avail: None },
    FunctionDef { id: 322, name: "Effect_NukeCalldown_pt", ftype: FunctionType::RawCmdPt, ability_id: 1622, general_id: 0, avail: None },
    FunctionDef { id: 90, name: "Effect_OracleRevelation_pt", ftype: FunctionType::RawCmdPt, ability_id: 2146, general_id: 0, avail: None },
    FunctionDef { id: 323, name: "Effect_ParasiticBomb_unit", ftype: FunctionType::RawCmdUnit, ability_id: 2542, general_id: 0, avail: None },
    FunctionDef { id: 65, name: "Effect_PsiStorm_pt", ftype: FunctionType::RawCmdPt, ability_id: 1036, general_id: 0, avail: None },
    FunctionDef { id: 167, name: "Effect_PurificationNova_pt", ftype: FunctionType::RawCmdPt, ability_id: 2346, general_id: 0, avail: None },
    FunctionDef { id: 324, name: "Effect_Repair_autocast", ftype: FunctionType::RawAutocast, ability_id: 3685, general_id: 0, avail: None },
    FunctionDef { id: 108, name: "Effect_Repair_pt", ftype: FunctionType::RawCmdPt, ability_id: 3685, general_id: 0, avail: None },
    FunctionDef { id: 109, name: "Effect_Repair_unit", ftype: FunctionType::RawCmdUnit, ability_id: 3685, general_id: 0, avail: None },
    FunctionDef { id: 326, name: "Effect_Repair_Mule_autocast", ftype: FunctionType::RawAutocast, ability_id: 78, general_id: 3685, avail: None },
    FunctionDef { id: 325, name: "Effect_Repair_Mule_unit", ftype: FunctionType::RawCmdUnit, ability_id: 78, general_id: 3685, avail: None },
    FunctionDef { id: 328, name: "Effect_Repair_RepairDrone_autocast", ftype: FunctionType::RawAutocast, ability_id: 3751, general_id: 3685, avail: None },
    FunctionDef { id: 327, name: "Effect_Repair_RepairDrone_unit", ftype: FunctionType::RawCmdUnit, ability_id: 3751, general_id: 3685, avail: None },
    FunctionDef { id: 330, name: "Effect_Repair_SCV_autocast", ftype: FunctionType::RawAutocast, ability_id: 316, general_id: 3685, avail: None },
    FunctionDef { id: 329, name: "Effect_Repair_SCV_unit", ftype: FunctionType::RawCmdUnit, ability_id: 316, general_id: 3685, avail: None },
    FunctionDef { id: 331, name: "Effect_Restore_autocast", ftype: FunctionType::RawAutocast, ability_id: 3765, general_id: 0, avail: None },
    FunctionDef { id: 161, name: "Effect_Restore_unit", ftype: FunctionType::RawCmdUnit, ability_id: 3765, general_id: 0, avail: None },
    FunctionDef { id: 332, name: "Effect_Salvage_quick", ftype: FunctionType::RawCmd, ability_id: 32, general_id: 0, avail: None },
    FunctionDef { id: 333, name: "Effect_Scan_pt", ftype: FunctionType::RawCmdPt, ability_id: 399, general_id: 0, avail: None },
    FunctionDef { id: 113, name: "Effect_ShadowStride_pt", ftype: FunctionType::RawCmdPt, ability_id: 2700, general_id: 3687, avail: None },
    FunctionDef { id: 334, name: "Effect_SpawnChangeling_quick", ftype: FunctionType::RawCmd, ability_id: 181, general_id: 0, avail: None },
    FunctionDef { id: 335, name: "Effect_SpawnLocusts_pt", ftype: FunctionType::RawCmdPt, ability_id: 2704, general_id: 0, avail: None },
    FunctionDef { id: 336, name: "Effect_SpawnLocusts_unit", ftype: FunctionType::RawCmdUnit, ability_id: 2704, general_id: 0, avail: None },
    FunctionDef { id: 337, name: "Effect_Spray_pt", ftype: FunctionType::RawCmdPt, ability_id: 3684, general_id: 0, avail: None },
    FunctionDef { id: 338, name: "Effect_Spray_Protoss_pt", ftype: FunctionType::RawCmdPt, ability_id: 30, general_id: 3684, avail: None },
    FunctionDef { id: 339, name: "Effect_Spray_Terran_pt", ftype: FunctionType::RawCmdPt, ability_id: 26, general_id: 3684, avail: None },
    FunctionDef { id: 340, name: "Effect_Spray_Zerg_pt", ftype: FunctionType::RawCmdPt, ability_id: 28, general_id: 3684, avail: None },
    FunctionDef { id: 341, name: "Effect_Stim_quick", ftype: FunctionType::RawCmd, ability_id: 3675, general_id: 0, avail: None },
    FunctionDef { id: 342, name: "Effect_Stim_Marauder_quick", ftype: FunctionType::RawCmd, ability_id: 253, general_id: 3675, avail: None },
    FunctionDef { id: 343, name: "Effect_Stim_Marauder_Redirect_quick", ftype: FunctionType::RawCmd, ability_id: 1684, general_id: 3675, avail: None },
    FunctionDef { id: 344, name: "Effect_Stim_Marine_quick", ftype: FunctionType::RawCmd, ability_id: 380, general_id: 3675, avail: None },
    FunctionDef { id: 345, name: "Effect_Stim_Marine_Redirect_quick", ftype: FunctionType::RawCmd, ability_id: 1683, general_id: 3675, avail: None },
    FunctionDef { id: 346, name: "Effect_SupplyDrop_unit", ftype: FunctionType::RawCmdUnit, ability_id: 255, general_id: 0, avail: None },
    FunctionDef { id: 347, name: "Effect_TacticalJump_pt", ftype: FunctionType::RawCmdPt, ability_id: 2358, general_id: 0, avail: None },
    FunctionDef { id: 348, name: "Effect_TimeWarp_pt", ftype: FunctionType::RawCmdPt, ability_id: 2244, general_id: 0, avail: None },
    FunctionDef { id: 349, name: "Effect_Transfusion_unit", ftype: FunctionType::RawCmdUnit, ability_id: 1664, general_id: 0, avail: None },
    FunctionDef { id: 350, name: "Effect_ViperConsume_unit", ftype: FunctionType::RawCmdUnit, ability_id: 2073, general_id: 0, avail: None },
    FunctionDef { id: 94, name: "Effect_VoidRayPrismaticAlignment_quick", ftype: FunctionType::RawCmd, ability_id: 2393, general_id: 0, avail: None },
    FunctionDef { id: 353, name: "Effect_WidowMineAttack_autocast", ftype: FunctionType::RawAutocast, ability_id: 2099, general_id: 0, avail: None },
    FunctionDef { id: 351, name: "Effect_WidowMineAttack_pt", ftype: FunctionType::RawCmdPt, ability_id: 2099, general_id: 0, avail: None },
    FunctionDef { id: 352, name: "Effect_WidowMineAttack_unit", ftype: FunctionType::RawCmdUnit, ability_id: 2099, general_id: 0, avail: None },
    FunctionDef { id: 537, name: "Effect_YamatoGun_unit", ftype: FunctionType::RawCmdUnit, ability_id: 401, general_id: 0, avail: None },
    FunctionDef { id: 93, name: "Hallucination_Adept_quick", ftype: FunctionType::RawCmd, ability_id: 2391, general_id: 0, avail: None },
    FunctionDef { id: 22, name: "Hallucination_Archon_quick", ftype: FunctionType::RawCmd, ability_id: 146, general_id: 0, avail: None },
    FunctionDef { id: 23, name: "Hallucination_Colossus_quick", ftype: FunctionType::RawCmd, ability_id: 148, general_id: 0, avail: None },
    FunctionDef { id: 92, name: "Hallucination_Disruptor_quick", ftype: FunctionType::RawCmd, ability_id: 2389, general_id: 0, avail: None },
    FunctionDef { id: 24, name: "Hallucination_HighTemplar_quick", ftype: FunctionType::RawCmd, ability_id: 150, general_id: 0, avail: None },
    FunctionDef { id: 25, name: "Hallucination_Immortal_quick", ftype: FunctionType::RawCmd, ability_id: 152, general_id: 0, avail: None },
    FunctionDef { id: 89, name: "Hallucination_Oracle_quick", ftype: FunctionType::RawCmd, ability_id: 2114, general_id: 0, avail: None },
    FunctionDef { id: 26, name: "Hallucination_Phoenix_quick", ftype: FunctionType::RawCmd, ability_id: 154, general_id: 0, avail: None },
    FunctionDef { id: 27, name: "Hallucination_Probe_quick", ftype: FunctionType::RawCmd, ability_id: 156, general_id: 0, avail: None },
    FunctionDef { id: 28, name: "Hallucination_Stalker_quick", ftype: FunctionType::RawCmd, ability_id: 158, general_id: 0, avail: None },
    FunctionDef { id: 29, name: "Hallucination_VoidRay_quick", ftype: FunctionType::RawCmd, ability_id: 160, general_id: 0, avail: None },
    FunctionDef { id: 30, name: "Hallucination_WarpPrism_quick", ftype: FunctionType::RawCmd, ability_id: 162, general_id: 0, avail: None },
    FunctionDef { id: 31, name: "Hallucination_Zealot_quick", ftype: FunctionType::RawCmd, ability_id: 164, general_id: 0, avail: None },
    FunctionDef { id: 354, name: "Halt_Building_quick", ftype: FunctionType::RawCmd, ability_id: 315, general_id: 3660, avail: None },
    FunctionDef { id: 99, name: "Halt_quick", ftype: FunctionType::RawCmd, ability_id: 3660, general_id: 0, avail: None },
    FunctionDef { id: 355, name: "Halt_TerranBuild_quick", ftype: FunctionType::RawCmd, ability_id: 348, general_id: 3660, avail: None },
    FunctionDef { id: 102, name: "Harvest_Gather_unit", ftype: FunctionType::RawCmdUnit, ability_id: 3666, general_id: 0, avail: None },
    FunctionDef { id: 356, name: "Harvest_Gather_Drone_unit", ftype: FunctionType::RawCmdUnit, ability_id: 1183, general_id: 3666, avail: None },
    FunctionDef { id: 357, name: "Harvest_Gather_Mule_unit", ftype: FunctionType::RawCmdUnit, ability_id: 166, general_id: 3666, avail: None },
    FunctionDef { id: 358, name: "Harvest_Gather_Probe_unit", ftype: FunctionType::RawCmdUnit, ability_id: 298, general_id: 3666, avail: None },
    FunctionDef { id: 359, name: "Harvest_Gather_SCV_unit", ftype: FunctionType::RawCmdUnit, ability_id: 295, general_id: 3666, avail: None },
    FunctionDef { id: 103, name: "Harvest_Return_quick", ftype: FunctionType::RawCmd, ability_id: 3667, general_id: 0, avail: None },
    FunctionDef { id: 360, name: "Harvest_Return_Drone_quick", ftype: FunctionType::RawCmd, ability_id: 1184, general_id: 3667, avail: None },
    FunctionDef { id: 361, name: "Harvest_Return_Mule_quick", ftype: FunctionType::RawCmd, ability_id: 167, general_id: 3667, avail: None },
    FunctionDef { id: 154, name: "Harvest_Return_Probe_quick", ftype: FunctionType::RawCmd, ability_id: 299, general_id: 3667, avail: None },
    FunctionDef { id: 362, name: "Harvest_Return_SCV_quick", ftype: FunctionType::RawCmd, ability_id: 296, general_id: 3667, avail: None },
    FunctionDef { id: 17, name: "HoldPosition_quick", ftype: FunctionType::RawCmd, ability_id: 3793, general_id: 0, avail: None },
    FunctionDef { id: 542, name: "HoldPosition_Battlecruiser_quick", ftype: FunctionType::RawCmd, ability_id: 3778, general_id: 3793, avail: None },
    FunctionDef { id: 543, name: "HoldPosition_Hold_quick", ftype: FunctionType::RawCmd, ability_id: 18, general_id: 3793, avail: None },
    FunctionDef { id: 364, name: "Land_Barracks_pt", ftype: FunctionType::RawCmdPt, ability_id: 554, general_id: 3678, avail: None },
    FunctionDef { id: 365, name: "Land_CommandCenter_pt", ftype: FunctionType::RawCmdPt, ability_id: 419, general_id: 3678, avail: None },
    FunctionDef { id: 366, name: "Land_Factory_pt", ftype: FunctionType::RawCmdPt, ability_id: 520, general_id: 3678, avail: None },
    FunctionDef { id: 367, name: "Land_OrbitalCommand_pt", ftype: FunctionType::RawCmdPt, ability_id: 1524, general_id: 3678, avail: None },
    FunctionDef { id: 363, name: "Land_pt", ftype: FunctionType::RawCmdPt, ability_id: 3678, general_id: 0, avail: None },
    FunctionDef { id: 368, name: "Land_Starport_pt", ftype: FunctionType::RawCmdPt, ability_id: 522, general_id: 3678, avail: None },
    FunctionDef { id: 370, name: "Lift_Barracks_quick", ftype: FunctionType::RawCmd, ability_id: 452, general_id: 3679, avail: None },
    FunctionDef { id: 371, name: "Lift_CommandCenter_quick", ftype: FunctionType::RawCmd, ability_id: 417, general_id: 3679, avail: None },
    FunctionDef { id: 372, name: "Lift_Factory_quick", ftype: FunctionType::RawCmd, ability_id: 485, general_id: 3679, avail: None },
    FunctionDef { id: 373, name: "Lift_OrbitalCommand_quick", ftype: FunctionType::RawCmd, ability_id: 1522, general_id: 3679, avail: None },
    FunctionDef { id: 369, name: "Lift_quick", ftype: FunctionType::RawCmd, ability_id: 3679, general_id: 0, avail: None },
    FunctionDef { id: 374, name: "Lift_Starport_quick", ftype: FunctionType::RawCmd, ability_id: 518, general_id: 3679, avail: None },
    FunctionDef { id: 376, name: "LoadAll_CommandCenter_quick", ftype: FunctionType::RawCmd, ability_id: 416, general_id: 3663, avail: None },
    FunctionDef { id: 375, name: "LoadAll_quick", ftype: FunctionType::RawCmd, ability_id: 3663, general_id: 0, avail: None },
    FunctionDef { id: 377, name: "Load_Bunker_unit", ftype: FunctionType::RawCmdUnit, ability_id: 407, general_id: 3668, avail: None },
    FunctionDef { id: 378, name: "Load_Medivac_unit", ftype: FunctionType::RawCmdUnit, ability_id: 394, general_id: 3668, avail: None },
    FunctionDef { id: 379, name: "Load_NydusNetwork_unit", ftype: FunctionType::RawCmdUnit, ability_id: 1437, general_id: 3668, avail: None },
    FunctionDef { id: 380, name: "Load_NydusWorm_unit", ftype: FunctionType::RawCmdUnit, ability_id: 2370, general_id: 3668, avail: None },
    FunctionDef { id: 381, name: "Load_Overlord_unit", ftype: FunctionType::RawCmdUnit, ability_id: 1406, general_id: 3668, avail: None },
    FunctionDef { id: 104, name: "Load_unit", ftype: FunctionType::RawCmdUnit, ability_id: 3668, general_id: 0, avail: None },
    FunctionDef { id: 382, name: "Load_WarpPrism_unit", ftype: FunctionType::RawCmdUnit, ability_id: 911, general_id: 3668, avail: None },
    FunctionDef { id: 86, name: "Morph_Archon_quick", ftype: FunctionType::RawCmd, ability_id: 1766, general_id: 0, avail: None },
    FunctionDef { id: 383, name: "Morph_BroodLord_quick", ftype: FunctionType::RawCmd, ability_id: 1372, general_id: 0, avail: None },
    FunctionDef { id: 78, name: "Morph_Gateway_quick", ftype: FunctionType::RawCmd, ability_id: 1520, general_id: 0, avail: None },
    FunctionDef { id: 384, name: "Morph_GreaterSpire_quick", ftype: FunctionType::RawCmd, ability_id: 1220, general_id: 0, avail: None },
    FunctionDef { id: 385, name: "Morph_Hellbat_quick", ftype: FunctionType::RawCmd, ability_id: 1998, general_id: 0, avail: None },
    FunctionDef { id: 386, name: "Morph_Hellion_quick", ftype: FunctionType::RawCmd, ability_id: 1978, general_id: 0, avail: None },
    FunctionDef { id: 387, name: "Morph_Hive_quick", ftype: FunctionType::RawCmd, ability_id: 1218, general_id: 0, avail: None },
    FunctionDef { id: 388, name: "Morph_Lair_quick", ftype: FunctionType::RawCmd, ability_id: 1216, general_id: 0, avail: None },
    FunctionDef { id: 389, name: "Morph_LiberatorAAMode_quick", ftype: FunctionType::RawCmd, ability_id: 2560, general_id: 0, avail: None },
    FunctionDef { id: 390, name: "Morph_LiberatorAGMode_pt", ftype: FunctionType::RawCmdPt, ability_id: 2558, general_id: 0, avail: None },
    FunctionDef { id: 392, name: "Morph_LurkerDen_quick", ftype: FunctionType::RawCmd, ability_id: 2112, general_id: 0, avail: None },
    FunctionDef { id: 391, name: "Morph_Lurker_quick", ftype: FunctionType::RawCmd, ability_id: 2332, general_id: 0, avail: None },
    FunctionDef { id: 393, name: "Morph_Mothership_quick", ftype: FunctionType::RawCmd, ability_id: 1847, general_id: 0, avail: None },
    FunctionDef { id: 121, name: "Morph_ObserverMode_quick", ftype: FunctionType::RawCmd, ability_id: 3739, general_id: 0, avail: None },
    FunctionDef { id: 394, name: "Morph_OrbitalCommand_quick", ftype: FunctionType::RawCmd, ability_id: 1516, general_id: 0, avail: None },
    FunctionDef { id: 395, name: "Morph_OverlordTransport_quick", ftype: FunctionType::RawCmd, ability_id: 2708, general_id: 0, avail: None },
    FunctionDef { id: 397, name: "Morph_OverseerMode_quick", ftype: FunctionType::RawCmd, ability_id: 3745, general_id: 0, avail: None },
    FunctionDef { id: 396, name: "Morph_Overseer_quick", ftype: FunctionType::RawCmd, ability_id: 1448, general_id: 0, avail: None },
    FunctionDef { id: 398, name: "Morph_OversightMode_quick", ftype: FunctionType::RawCmd, ability_id: 3743, general_id: 0, avail: None },
    FunctionDef { id: 399, name: "Morph_PlanetaryFortress_quick", ftype: FunctionType::RawCmd, ability_id: 1450, general_id: 0, avail: None },
    FunctionDef { id: 400, name: "Morph_Ravager_quick", ftype: FunctionType::RawCmd, ability_id: 2330, general_id: 0, avail: None },
    FunctionDef { id: 401, name: "Morph_Root_pt", ftype: FunctionType::RawCmdPt, ability_id: 3680, general_id: 0, avail: None },
    FunctionDef { id: 402, name: "Morph_SiegeMode_quick", ftype: FunctionType::RawCmd, ability_id: 388, general_id: 0, avail: None },
    FunctionDef { id: 403, name: "Morph_SpineCrawlerRoot_pt", ftype: FunctionType::RawCmdPt, ability_id: 1729, general_id: 3680, avail: None },
    FunctionDef { id: 404, name: "Morph_SpineCrawlerUproot_quick", ftype: FunctionType::RawCmd, ability_id: 1725, general_id: 3681, avail: None },
    FunctionDef { id: 405, name: "Morph_SporeCrawlerRoot_pt", ftype: FunctionType::RawCmdPt, ability_id: 1731, general_id: 3680, avail: None },
    FunctionDef { id: 406, name: "Morph_SporeCrawlerUproot_quick", ftype: FunctionType::RawCmd, ability_id: 1727, general_id: 3681, avail: None },
    FunctionDef { id: 407, name: "Morph_SupplyDepot_Lower_quick", ftype: FunctionType::RawCmd, ability_id: 556, general_id: 0, avail: None },
    FunctionDef { id: 408, name: "Morph_SupplyDepot_Raise_quick", ftype: FunctionType::RawCmd, ability_id: 558, general_id: 0, avail: None },
    FunctionDef { id: 160, name: "Morph_SurveillanceMode_quick", ftype: FunctionType::RawCmd, ability_id: 3741, general_id: 0, avail: None },
    FunctionDef { id: 409, name: "Morph_ThorExplosiveMode_quick", ftype: FunctionType::RawCmd, ability_id: 2364, general_id: 0, avail: None },
    FunctionDef { id: 410, name: "Morph_ThorHighImpactMode_quick", ftype: FunctionType::RawCmd, ability_id: 2362, general_id: 0, avail: None },
    FunctionDef { id: 411, name: "Morph_Unsiege_quick", ftype: FunctionType::RawCmd, ability_id: 390, general_id: 0, avail: None },
    FunctionDef { id: 412, name: "Morph_Uproot_quick", ftype: FunctionType::RawCmd, ability_id: 3681, general_id: 0, avail: None },
    FunctionDef { id: 413, name: "Morph_VikingAssaultMode_quick", ftype: FunctionType::RawCmd, ability_id: 403, general_id: 0, avail: None },
    FunctionDef { id: 414, name: "Morph_VikingFighterMode_quick", ftype: FunctionType::RawCmd, ability_id: 405, general_id: 0, avail: None },
    FunctionDef { id: 77, name: "Morph_WarpGate_quick", ftype: FunctionType::RawCmd, ability_id: 1518, general_id: 0, avail: None },
    FunctionDef { id: 544, name: "Morph_WarpGate_autocast", ftype: FunctionType::RawAutocast, ability_id: 1518, general_id: 0, avail: None },
    FunctionDef { id: 80, name: "Morph_WarpPrismPhasingMode_quick", ftype: FunctionType::RawCmd, ability_id: 1528, general_id: 0, avail: None },
    FunctionDef { id: 81, name: "Morph_WarpPrismTransportMode_quick", ftype: FunctionType::RawCmd, ability_id: 1530, general_id: 0, avail: None },
    FunctionDef { id: 13, name: "Move_pt", ftype: FunctionType::RawCmdPt, ability_id: 3794, general_id: 0, avail: None },
    FunctionDef { id: 14, name: "Move_unit", ftype: FunctionType::RawCmdUnit, ability_id: 3794, general_id: 0, avail: None },
    FunctionDef { id: 545, name: "Move_Battlecruiser_pt", ftype: FunctionType::RawCmdPt, ability_id: 3776, general_id: 3794, avail: None },
    FunctionDef { id: 546, name: "Move_Battlecruiser_unit", ftype: FunctionType::RawCmdUnit, ability_id: 3776, general_id: 3794, avail: None },
    FunctionDef { id: 547, name: "Move_Move_pt", ftype: FunctionType::RawCmdPt, ability_id: 16, general_id: 3794, avail: None },
    FunctionDef { id: 548, name: "Move_Move_unit", ftype: FunctionType::RawCmdUnit, ability_id: 16, general_id: 3794, avail: None },
    FunctionDef { id: 15, name: "Patrol_pt", ftype: FunctionType::RawCmdPt, ability_id: 3795, general_id: 0, avail: None },
    FunctionDef { id: 16, name: "Patrol_unit", ftype: FunctionType::RawCmdUnit, ability_id: 3795, general_id: 0, avail: None },
    FunctionDef { id: 549, name: "Patrol_Battlecruiser_pt", ftype: FunctionType::RawCmdPt, ability_id: 3777, general_id: 3795, avail: None },
    FunctionDef { id: 550, name: "Patrol_Battlecruiser_unit", ftype: FunctionType::RawCmdUnit, ability_id: 3777, general_id: 3795, avail: None },
    FunctionDef { id: 551, name: "Patrol_Patrol_pt", ftype: FunctionType::RawCmdPt, ability_id: 17, general_id: 3795, avail: None },
    FunctionDef { id: 552, name: "Patrol_Patrol_unit", ftype: FunctionType::RawCmdUnit, ability_id: 17, general_id: 3795, avail: None },
    FunctionDef { id: 415, name: "Rally_Building_pt", ftype: FunctionType::RawCmdPt, ability_id: 195, general_id: 3673, avail: None },
    FunctionDef { id: 416, name: "Rally_Building_unit", ftype: FunctionType::RawCmdUnit, ability_id: 195, general_id: 3673, avail: None },
    FunctionDef { id: 417, name: "Rally_CommandCenter_pt", ftype: FunctionType::RawCmdPt, ability_id: 203, general_id: 3690, avail: None },
    FunctionDef { id: 418, name: "Rally_CommandCenter_unit", ftype: FunctionType::RawCmdUnit, ability_id: 203, general_id: 3690, avail: None },
    FunctionDef { id: 419, name: "Rally_Hatchery_Units_pt", ftype: FunctionType::RawCmdPt, ability_id: 211, general_id: 3673, avail: None },
    FunctionDef { id: 420, name: "Rally_Hatchery_Units_unit", ftype: FunctionType::RawCmdUnit, ability_id: 211, general_id: 3673, avail: None },
    FunctionDef { id: 421, name: "Rally_Hatchery_Workers_pt", ftype: FunctionType::RawCmdPt, ability_id: 212, general_id: 3690, avail: None },
    FunctionDef { id: 422, name: "Rally_Hatchery_Workers_unit", ftype: FunctionType::RawCmdUnit, ability_id: 212, general_id: 3690, avail: None },
    FunctionDef { id: 423, name: "Rally_Morphing_Unit_pt", ftype: FunctionType::RawCmdPt, ability_id: 199, general_id: 3673, avail: None },
    FunctionDef { id: 424, name: "Rally_Morphing_Unit_unit", ftype: FunctionType::RawCmdUnit, ability_id: 199, general_id: 3673, avail: None },
    FunctionDef { id: 138, name: "Rally_Nexus_pt", ftype: FunctionType::RawCmdPt, ability_id: 207, general_id: 3690, avail: None },
    FunctionDef { id: 165, name: "Rally_Nexus_unit", ftype: FunctionType::RawCmdUnit, ability_id: 207, general_id: 3690, avail: None },
    FunctionDef { id: 106, name: "Rally_Units_pt", ftype: FunctionType::RawCmdPt, ability_id: 3673, general_id: 0, avail: None },
    FunctionDef { id: 107, name: "Rally_Units_unit", ftype: FunctionType::RawCmdUnit, ability_id: 3673, general_id: 0, avail: None },
    FunctionDef { id: 114, name: "Rally_Workers_pt", ftype: FunctionType::RawCmdPt, ability_id: 3690, general_id: 0, avail: None },
    FunctionDef { id: 115, name: "Rally_Workers_unit", ftype: FunctionType::RawCmdUnit, ability_id: 3690, general_id: 0, avail: None },
    FunctionDef { id: 425, name: "Research_AdaptiveTalons_quick", ftype: FunctionType::RawCmd, ability_id: 3709, general_id: 0, avail: None },
    FunctionDef { id: 85, name: "Research_AdeptResonatingGlaives_quick", ftype: FunctionType::RawCmd, ability_id: 1594, general_id: 0, avail: None },
    FunctionDef { id: 426, name: "Research_AdvancedBallistics_quick", ftype: FunctionType::RawCmd, ability_id: 805, general_id: 0, avail: None },
    FunctionDef { id: 553, name: "Research_AnabolicSynthesis_quick", ftype: FunctionType::RawCmd, ability_id: 263, general_id: 0, avail: None },
    FunctionDef { id: 427, name: "Research_BansheeCloakingField_quick", ftype: FunctionType::RawCmd, ability_id: 790, general_id: 0, avail: None },
    FunctionDef { id: 428, name: "Research_BansheeHyperflightRotors_quick", ftype: FunctionType::RawCmd, ability_id: 799, general_id: 0, avail: None },
    FunctionDef { id: 429, name: "Research_BattlecruiserWeaponRefit_quick", ftype: FunctionType::RawCmd, ability_id: 1532, general_id: 0, avail: None },
    FunctionDef { id: 84, name: "Research_Blink_quick", ftype: FunctionType::RawCmd, ability_id: 1593, general_id: 0, avail: None },
    FunctionDef { id: 430, name: "Research_Burrow_quick", ftype: FunctionType::RawCmd, ability_id: 1225, general_id: 0, avail: None },
    FunctionDef { id: 431, name: "Research_CentrifugalHooks_quick", ftype: FunctionType::RawCmd, ability_id: 1482, general_id: 0, avail: None },
    FunctionDef { id: 83, name: "Research_Charge_quick", ftype: FunctionType::RawCmd, ability_id: 1592, general_id: 0, avail: None },
    FunctionDef { id: 432, name: "Research_ChitinousPlating_quick", ftype: FunctionType::RawCmd, ability_id: 265, general_id: 0, avail: None },
    FunctionDef { id: 433, name: "Research_CombatShield_quick", ftype: FunctionType::RawCmd, ability_id: 731, general_id: 0, avail: None },
    FunctionDef { id: 434, name: "Research_ConcussiveShells_quick", ftype: FunctionType::RawCmd, ability_id: 732, general_id: 0, avail: None },
    FunctionDef { id: 554, name: "Research_CycloneLockOnDamage_quick", ftype: FunctionType::RawCmd, ability_id: 769, general_id: 0, avail: None },
    FunctionDef { id: 435, name: "Research_CycloneRapidFireLaunchers_quick", ftype: FunctionType::RawCmd, ability_id: 768, general_id: 0, avail: None },
    FunctionDef { id: 436, name: "Research_DrillingClaws_quick", ftype: FunctionType::RawCmd, ability_id: 764, general_id: 0, avail: None },
    FunctionDef { id: 563, name: "Research_EnhancedShockwaves_quick", ftype: FunctionType::RawCmd, ability_id: 822, general_id: 0, avail: None },
    FunctionDef { id: 69, name: "Research_ExtendedThermalLance_quick", ftype: FunctionType::RawCmd, ability_id: 1097, general_id: 0, avail: None },
    FunctionDef { id: 437, name: "Research_GlialRegeneration_quick", ftype: FunctionType::RawCmd, ability_id: 216, general_id: 0, avail: None },
    FunctionDef { id: 67, name: "Research_GraviticBooster_quick", ftype: FunctionType::RawCmd, ability_id: 1093, general_id: 0, avail: None },
    FunctionDef { id: 68, name: "Research_GraviticDrive_quick", ftype: FunctionType::RawCmd, ability_id: 1094, general_id: 0, avail: None },
    FunctionDef { id: 438, name: "Research_GroovedSpines_quick", ftype: FunctionType::RawCmd, ability_id: 1282, general_id: 0, avail: None },
    FunctionDef { id: 440, name: "Research_HighCapacityFuelTanks_quick", ftype: FunctionType::RawCmd, ability_id: 804, general_id: 0, avail: None },
    FunctionDef { id: 439, name: "Research_HiSecAutoTracking_quick", ftype: FunctionType::RawCmd, ability_id: 650, general_id: 0, avail: None },
    FunctionDef { id: 441, name: "Research_InfernalPreigniter_quick", ftype: FunctionType::RawCmd, ability_id: 761, general_id: 0, avail: None },
    FunctionDef { id: 18, name: "Research_InterceptorGravitonCatapult_quick", ftype: FunctionType::RawCmd, ability_id: 44, general_id: 0, avail: None },
    FunctionDef { id: 442, name: "Research_MuscularAugments_quick", ftype: FunctionType::RawCmd, ability_id: 1283, general_id: 0, avail: None },
    FunctionDef { id: 443, name: "Research_NeosteelFrame_quick", ftype: FunctionType::RawCmd, ability_id: 655, general_id: 0, avail: None },
    FunctionDef { id: 444, name: "Research_NeuralParasite_quick", ftype: FunctionType::RawCmd, ability_id: 1455, general_id: 0, avail: None },
    FunctionDef { id: 445, name: "Research_PathogenGlands_quick", ftype: FunctionType::RawCmd, ability_id: 1454, general_id: 0, avail: None },
    FunctionDef { id: 446, name: "Research_PersonalCloaking_quick", ftype: FunctionType::RawCmd, ability_id: 820, general_id: 0, avail: None },
    FunctionDef { id: 19, name: "Research_PhoenixAnionPulseCrystals_quick", ftype: FunctionType::RawCmd, ability_id: 46, general_id: 0, avail: None },
    FunctionDef { id: 447, name: "Research_PneumatizedCarapace_quick", ftype: FunctionType::RawCmd, ability_id: 1223, general_id: 0, avail: None },
    FunctionDef { id: 139, name: "Research_ProtossAirArmorLevel1_quick", ftype: FunctionType::RawCmd, ability_id: 1565, general_id: 3692, avail: None },
    FunctionDef { id: 140, name: "Research_ProtossAirArmorLevel2_quick", ftype: FunctionType::RawCmd, ability_id: 1566, general_id: 3692, avail: None },
    FunctionDef { id: 141, name: "Research_ProtossAirArmorLevel3_quick", ftype: FunctionType::RawCmd, ability_id: 1567, general_id: 3692, avail: None },
    FunctionDef { id: 116, name: "Research_ProtossAirArmor_quick", ftype: FunctionType::RawCmd, ability_id: 3692, general_id: 0, avail: None },
    FunctionDef { id: 142, name: "Research_ProtossAirWeaponsLevel1_quick", ftype: FunctionType::RawCmd, ability_id: 1562, general_id: 3693, avail: None },
    FunctionDef { id: 143, name: "Research_ProtossAirWeaponsLevel2_quick", ftype: FunctionType::RawCmd, ability_id: 1563, general_id: 3693, avail: None },
    FunctionDef { id: 144, name: "Research_ProtossAirWeaponsLevel3_quick", ftype: FunctionType::RawCmd, ability_id: 1564, general_id: 3693, avail: None },
    FunctionDef { id: 117, name: "Research_ProtossAirWeapons_quick", ftype: FunctionType::RawCmd, ability_id: 3693, general_id: 0, avail: None },
    FunctionDef { id: 145, name: "Research_ProtossGroundArmorLevel1_quick", ftype: FunctionType::RawCmd, ability_id: 1065, general_id: 3694, avail: None },
    FunctionDef { id: 146, name: "Research_ProtossGroundArmorLevel2_quick", ftype: FunctionType::RawCmd, ability_id: 1066, general_id: 3694, avail: None },
    FunctionDef { id: 147, name: "Research_ProtossGroundArmorLevel3_quick", ftype: FunctionType::RawCmd, ability_id: 1067, general_id: 3694, avail: None },
    FunctionDef { id: 118, name: "Research_ProtossGroundArmor_quick", ftype: FunctionType::RawCmd, ability_id: 3694, general_id: 0, avail: None },
    FunctionDef { id: 148, name: "Research_ProtossGroundWeaponsLevel1_quick", ftype: FunctionType::RawCmd, ability_id: 1062, general_id: 3695, avail: None },
    FunctionDef { id: 149, name: "Research_ProtossGroundWeaponsLevel2_quick", ftype: FunctionType::RawCmd, ability_id: 1063, general_id: 3695, avail: None },
    FunctionDef { id: 150, name: "Research_ProtossGroundWeaponsLevel3_quick", ftype: FunctionType::RawCmd, ability_id: 1064, general_id: 3695, avail: None },
    FunctionDef { id: 119, name: "Research_ProtossGroundWeapons_quick", ftype: FunctionType::RawCmd, ability_id: 3695, general_id: 0, avail: None },
    FunctionDef { id: 151, name: "Research_ProtossShieldsLevel1_quick", ftype: FunctionType::RawCmd, ability_id: 1068, general_id: 3696, avail: None },
    FunctionDef { id: 152, name: "Research_ProtossShieldsLevel2_quick", ftype: FunctionType::RawCmd, ability_id: 1069, general_id: 3696, avail: None },
    FunctionDef { id: 153, name: "Research_ProtossShieldsLevel3_quick", ftype: FunctionType::RawCmd, ability_id: 1070, general_id: 3696, avail: None },
    FunctionDef { id: 120, name: "Research_ProtossShields_quick", ftype: FunctionType::RawCmd, ability_id: 3696, general_id: 0, avail: None },
    FunctionDef { id: 70, name: "Research_PsiStorm_quick", ftype: FunctionType::RawCmd, ability_id: 1126, general_id: 0, avail: None },
    FunctionDef { id: 448, name: "Research_RavenCorvidReactor_quick", ftype: FunctionType::RawCmd, ability_id: 793, general_id: 0, avail: None },
    FunctionDef { id: 449, name: "Research_RavenRecalibratedExplosives_quick", ftype: FunctionType::RawCmd, ability_id: 803, general_id: 0, avail: None },
    FunctionDef { id: 97, name: "Research_ShadowStrike_quick", ftype: FunctionType::RawCmd, ability_id: 2720, general_id: 0, avail: None },
    FunctionDef { id: 450, name: "Research_SmartServos_quick", ftype: FunctionType::RawCmd, ability_id: 766, general_id: 0, avail: None },
    FunctionDef { id: 451, name: "Research_Stimpack_quick", ftype: FunctionType::RawCmd, ability_id: 730, general_id: 0, avail: None },
    FunctionDef { id: 453, name: "Research_TerranInfantryArmorLevel1_quick", ftype: FunctionType::RawCmd, ability_id: 656, general_id: 3697, avail: None },
    FunctionDef { id: 454, name: "Research_TerranInfantryArmorLevel2_quick", ftype: FunctionType::RawCmd, ability_id: 657, general_id: 3697, avail: None },
    FunctionDef { id: 455, name: "Research_TerranInfantryArmorLevel3_quick", ftype: FunctionType::RawCmd, ability_id: 658, general_id: 3697, avail: None },
    FunctionDef { id: 452, name: "Research_TerranInfantryArmor_quick", ftype: FunctionType::RawCmd, ability_id: 3697, general_id: 0, avail: None },
    FunctionDef { id: 457, name: "Research_TerranInfantryWeaponsLevel1_quick", ftype: FunctionType::RawCmd, ability_id: 652, general_id: 3698, avail: None },
    FunctionDef { id: 458, name: "Research_TerranInfantryWeaponsLevel2_quick", ftype: FunctionType::RawCmd, ability_id: 653, general_id: 3698, avail: None },
    FunctionDef { id: 459, name: "Research_TerranInfantryWeaponsLevel3_quick", ftype: FunctionType::RawCmd, ability_id: 654, general_id: 3698, avail: None },
    FunctionDef { id: 456, name: "Research_TerranInfantryWeapons_quick", ftype: FunctionType::RawCmd, ability_id: 3698, general_id: 0, avail: None },
    FunctionDef { id: 461, name: "Research_TerranShipWeaponsLevel1_quick", ftype: FunctionType::RawCmd, ability_id: 861, general_id: 3699, avail: None },
    FunctionDef { id: 462, name: "Research_TerranShipWeaponsLevel2_quick", ftype: FunctionType::RawCmd, ability_id: 862, general_id: 3699, avail: None },
    FunctionDef { id: 463, name: "Research_TerranShipWeaponsLevel3_quick", ftype: FunctionType::RawCmd, ability_id: 863, general_id: 3699, avail: None },
    FunctionDef { id: 460, name: "Research_TerranShipWeapons_quick", ftype: FunctionType::RawCmd, ability_id: 3699, general_id: 0, avail: None },
    FunctionDef { id: 464, name: "Research_TerranStructureArmorUpgrade_quick", ftype: FunctionType::RawCmd, ability_id: 651, general_id: 0, avail: None },
    FunctionDef { id: 466, name: "Research_TerranVehicleAndShipPlatingLevel1_quick", ftype: FunctionType::RawCmd, ability_id: 864, general_id: 3700, avail: None },
    FunctionDef { id: 467, name: "Research_TerranVehicleAndShipPlatingLevel2_quick", ftype: FunctionType::RawCmd, ability_id: 865, general_id: 3700, avail: None },
    FunctionDef { id: 468, name: "Research_TerranVehicleAndShipPlatingLevel3_quick", ftype: FunctionType::RawCmd, ability_id: 866, general_id: 3700, avail: None },
    FunctionDef { id: 465, name: "Research_TerranVehicleAndShipPlating_quick", ftype: FunctionType::RawCmd, ability_id: 3700, general_id: 0, avail: None },
    FunctionDef { id: 470, name: "Research_TerranVehicleWeaponsLevel1_quick", ftype: FunctionType::RawCmd, ability_id: 855, general_id: 3701, avail: None },
    FunctionDef { id: 471, name: "Research_TerranVehicleWeaponsLevel2_quick", ftype: FunctionType::RawCmd, ability_id: 856, general_id: 3701, avail: None },
    FunctionDef { id: 472, name: "Research_TerranVehicleWeaponsLevel3_quick", ftype: FunctionType::RawCmd, ability_id: 857, general_id: 3701, avail: None },
    FunctionDef { id: 469, name: "Research_TerranVehicleWeapons_quick", ftype: FunctionType::RawCmd, ability_id: 3701, general_id: 0, avail: None },
    FunctionDef { id: 473, name: "Research_TunnelingClaws_quick", ftype: FunctionType::RawCmd, ability_id: 217, general_id: 0, avail: None },
    FunctionDef { id: 82, name: "Research_WarpGate_quick", ftype: FunctionType::RawCmd, ability_id: 1568, general_id: 0, avail: None },
    FunctionDef { id: 475, name: "Research_ZergFlyerArmorLevel1_quick", ftype: FunctionType::RawCmd, ability_id: 1315, general_id: 3702, avail: None },
    FunctionDef { id: 476, name: "Research_ZergFlyerArmorLevel2_quick", ftype: FunctionType::RawCmd, ability_id: 1316, general_id: 3702, avail: None },
    FunctionDef { id: 477, name: "Research_ZergFlyerArmorLevel3_quick", ftype: FunctionType::RawCmd, ability_id: 1317, general_id: 3702, avail: None },
    FunctionDef { id: 474, name: "Research_ZergFlyerArmor_quick", ftype: FunctionType::RawCmd, ability_id: 3702, general_id: 0, avail: None },
    FunctionDef { id: 479, name: "Research_ZergFlyerAttackLevel1_quick", ftype: FunctionType::RawCmd, ability_id: 1312, general_id: 3703, avail: None },
    FunctionDef { id: 480, name: "Research_ZergFlyerAttackLevel2_quick", ftype: FunctionType::RawCmd, ability_id: 1313, general_id: 3703, avail: None },
    FunctionDef { id: 481, name: "Research_ZergFlyerAttackLevel3_quick", ftype: FunctionType::RawCmd, ability_id: 1314, general_id: 3703, avail: None },
    FunctionDef { id: 478, name: "Research_ZergFlyerAttack_quick", ftype: FunctionType::RawCmd, ability_id: 3703, general_id: 0, avail: None },
    FunctionDef { id: 483, name: "Research_ZergGroundArmorLevel1_quick", ftype: FunctionType::RawCmd, ability_id: 1189, general_id: 3704, avail: None },
    FunctionDef { id: 484, name: "Research_ZergGroundArmorLevel2_quick", ftype: FunctionType::RawCmd, ability_id: 1190, general_id: 3704, avail: None },
    FunctionDef { id: 485, name: "Research_ZergGroundArmorLevel3_quick", ftype: FunctionType::RawCmd, ability_id: 1191, general_id: 3704, avail: None },
    FunctionDef { id: 482, name: "Research_ZergGroundArmor_quick", ftype: FunctionType::RawCmd, ability_id: 3704, general_id: 0, avail: None },
    FunctionDef { id: 494, name: "Research_ZerglingAdrenalGlands_quick", ftype: FunctionType::RawCmd, ability_id: 1252, general_id: 0, avail: None },
    FunctionDef { id: 495, name: "Research_ZerglingMetabolicBoost_quick", ftype: FunctionType::RawCmd, ability_id: 1253, general_id: 0, avail: None },
    FunctionDef { id: 487, name: "Research_ZergMeleeWeaponsLevel1_quick", ftype: FunctionType::RawCmd, ability_id: 1186, general_id: 3705, avail: None },
    FunctionDef { id: 488, name: "Research_ZergMeleeWeaponsLevel2_quick", ftype: FunctionType::RawCmd, ability_id: 1187, general_id: 3705, avail: None },
    FunctionDef { id: 489, name: "Research_ZergMeleeWeaponsLevel3_quick", ftype: FunctionType::RawCmd, ability_id: 1188, general_id: 3705, avail: None },
    FunctionDef { id: 486, name: "Research_ZergMeleeWeapons_quick", ftype: FunctionType::RawCmd, ability_id: 3705, general_id: 0, avail: None },
    FunctionDef { id: 491, name: "Research_ZergMissileWeaponsLevel1_quick", ftype: FunctionType::RawCmd, ability_id: 1192, general_id: 3706, avail: None },
    FunctionDef { id: 492, name: "Research_ZergMissileWeaponsLevel2_quick", ftype: FunctionType::RawCmd, ability_id: 1193, general_id: 3706, avail: None },
    FunctionDef { id: 493, name: "Research_ZergMissileWeaponsLevel3_quick", ftype: FunctionType::RawCmd, ability_id: 1194, general_id: 3706, avail: None },
    FunctionDef { id: 490, name: "Research_ZergMissileWeapons_quick", ftype: FunctionType::RawCmd, ability_id: 3706, general_id: 0, avail: None },
    FunctionDef { id: 10, name: "Scan_Move_pt", ftype: FunctionType::RawCmdPt, ability_id: 19, general_id: 3674, avail: None },
    FunctionDef { id: 11, name: "Scan_Move_unit", ftype: FunctionType::RawCmdUnit, ability_id: 19, general_id: 3674, avail: None },
    FunctionDef { id: 1, name: "Smart_pt", ftype: FunctionType::RawCmdPt, ability_id: 1, general_id: 0, avail: None },
    FunctionDef { id: 12, name: "Smart_unit", ftype: FunctionType::RawCmdUnit, ability_id: 1, general_id: 0, avail: None },
    FunctionDef { id: 101, name: "Stop_quick", ftype: FunctionType::RawCmd, ability_id: 3665, general_id: 0, avail: None },
    FunctionDef { id: 555, name: "Stop_Battlecruiser_quick", ftype: FunctionType::RawCmd, ability_id: 3783, general_id: 3665, avail: None },
    FunctionDef { id: 496, name: "Stop_Building_quick", ftype: FunctionType::RawCmd, ability_id: 2057, general_id: 3665, avail: None },
    FunctionDef { id: 497, name: "Stop_Redirect_quick", ftype: FunctionType::RawCmd, ability_id: 1691, general_id: 3665, avail: None },
    FunctionDef { id: 155, name: "Stop_Stop_quick", ftype: FunctionType::RawCmd, ability_id: 4, general_id: 3665, avail: None },
    FunctionDef { id: 54, name: "Train_Adept_quick", ftype: FunctionType::RawCmd, ability_id: 922, general_id: 0, avail: None },
    FunctionDef { id: 498, name: "Train_Baneling_quick", ftype: FunctionType::RawCmd, ability_id: 80, general_id: 0, avail: None },
    FunctionDef { id: 499, name: "Train_Banshee_quick", ftype: FunctionType::RawCmd, ability_id: 621, general_id: 0, avail: None },
    FunctionDef { id: 500, name: "Train_Battlecruiser_quick", ftype: FunctionType::RawCmd, ability_id: 623, general_id: 0, avail: None },
    FunctionDef { id: 56, name: "Train_Carrier_quick", ftype: FunctionType::RawCmd, ability_id: 948, general_id: 0, avail: None },
    FunctionDef { id: 62, name: "Train_Colossus_quick", ftype: FunctionType::RawCmd, ability_id: 978, general_id: 0, avail: None },
    FunctionDef { id: 501, name: "Train_Corruptor_quick", ftype: FunctionType::RawCmd, ability_id: 1353, general_id: 0, avail: None },
    FunctionDef { id: 502, name: "Train_Cyclone_quick", ftype: FunctionType::RawCmd, ability_id: 597, general_id: 0, avail: None },
    FunctionDef { id: 52, name: "Train_DarkTemplar_quick", ftype: FunctionType::RawCmd, ability_id: 920, general_id: 0, avail: None },
    FunctionDef { id: 166, name: "Train_Disruptor_quick", ftype: FunctionType::RawCmd, ability_id: 994, general_id: 0, avail: None },
    FunctionDef { id: 503, name: "Train_Drone_quick", ftype: FunctionType::RawCmd, ability_id: 1342, general_id: 0, avail: None },
    FunctionDef { id: 504, name: "Train_Ghost_quick", ftype: FunctionType::RawCmd, ability_id: 562, general_id: 0, avail: None },
    FunctionDef { id: 505, name: "Train_Hellbat_quick", ftype: FunctionType::RawCmd, ability_id: 596, general_id: 0, avail: None },
    FunctionDef { id: 506, name: "Train_Hellion_quick", ftype: FunctionType::RawCmd, ability_id: 595, general_id: 0, avail: None },
    FunctionDef { id: 51, name: "Train_HighTemplar_quick", ftype: FunctionType::RawCmd, ability_id: 919, general_id: 0, avail: None },
    FunctionDef { id: 507, name: "Train_Hydralisk_quick", ftype: FunctionType::RawCmd, ability_id: 1345, general_id: 0, avail: None },
    FunctionDef { id: 63, name: "Train_Immortal_quick", ftype: FunctionType::RawCmd, ability_id: 979, general_id: 0, avail: None },
    FunctionDef { id: 508, name: "Train_Infestor_quick", ftype: FunctionType::RawCmd, ability_id: 1352, general_id: 0, avail: None },
    FunctionDef { id: 509, name: "Train_Liberator_quick", ftype: FunctionType::RawCmd, ability_id: 626, general_id: 0, avail: None },
    FunctionDef { id: 510, name: "Train_Marauder_quick", ftype: FunctionType::RawCmd, ability_id: 563, general_id: 0, avail: None },
    FunctionDef { id: 511, name: "Train_Marine_quick", ftype: FunctionType::RawCmd, ability_id: 560, general_id: 0, avail: None },
    FunctionDef { id: 512, name: "Train_Medivac_quick", ftype: FunctionType::RawCmd, ability_id: 620, general_id: 0, avail: None },
    FunctionDef { id: 513, name: "Train_MothershipCore_quick", ftype: FunctionType::RawCmd, ability_id: 1853, general_id: 0, avail: None },
    FunctionDef { id: 21, name: "Train_Mothership_quick", ftype: FunctionType::RawCmd, ability_id: 110, general_id: 0, avail: None },
    FunctionDef { id: 514, name: "Train_Mutalisk_quick", ftype: FunctionType::RawCmd, ability_id: 1346, general_id: 0, avail: None },
    FunctionDef { id: 61, name: "Train_Observer_quick", ftype: FunctionType::RawCmd, ability_id: 977, general_id: 0, avail: None },
    FunctionDef { id: 58, name: "Train_Oracle_quick", ftype: FunctionType::RawCmd, ability_id: 954, general_id: 0, avail: None },
    FunctionDef { id: 515, name: "Train_Overlord_quick", ftype: FunctionType::RawCmd, ability_id: 1344, general_id: 0, avail: None },
    FunctionDef { id: 55, name: "Train_Phoenix_quick", ftype: FunctionType::RawCmd, ability_id: 946, general_id: 0, avail: None },
    FunctionDef { id: 64, name: "Train_Probe_quick", ftype: FunctionType::RawCmd, ability_id: 1006, general_id: 0, avail: None },
    FunctionDef { id: 516, name: "Train_Queen_quick", ftype: FunctionType::RawCmd, ability_id: 1632, general_id: 0, avail: None },
    FunctionDef { id: 517, name: "Train_Raven_quick", ftype: FunctionType::RawCmd, ability_id: 622, general_id: 0, avail: None },
    FunctionDef { id: 518, name: "Train_Reaper_quick", ftype: FunctionType::RawCmd, ability_id: 561, general_id: 0, avail: None },
    FunctionDef { id: 519, name: "Train_Roach_quick", ftype: FunctionType::RawCmd, ability_id: 1351, general_id: 0, avail: None },
    FunctionDef { id: 520, name: "Train_SCV_quick", ftype: FunctionType::RawCmd, ability_id: 524, general_id: 0, avail: None },
    FunctionDef { id: 53, name: "Train_Sentry_quick", ftype: FunctionType::RawCmd, ability_id: 921, general_id: 0, avail: None },
    FunctionDef { id: 521, name: "Train_SiegeTank_quick", ftype: FunctionType::RawCmd, ability_id: 591, general_id: 0, avail: None },
    FunctionDef { id: 50, name: "Train_Stalker_quick", ftype: FunctionType::RawCmd, ability_id: 917, general_id: 0, avail: None },
    FunctionDef { id: 522, name: "Train_SwarmHost_quick", ftype: FunctionType::RawCmd, ability_id: 1356, general_id: 0, avail: None },
    FunctionDef { id: 59, name: "Train_Tempest_quick", ftype: FunctionType::RawCmd, ability_id: 955, general_id: 0, avail: None },
    FunctionDef { id: 523, name: "Train_Thor_quick", ftype: FunctionType::RawCmd, ability_id: 594, general_id: 0, avail: None },
    FunctionDef { id: 524, name: "Train_Ultralisk_quick", ftype: FunctionType::RawCmd, ability_id: 1348, general_id: 0, avail: None },
    FunctionDef { id: 525, name: "Train_VikingFighter_quick", ftype: FunctionType::RawCmd, ability_id: 624, general_id: 0, avail: None },
    FunctionDef { id: 526, name: "Train_Viper_quick", ftype: FunctionType::RawCmd, ability_id: 1354, general_id: 0, avail: None },
    FunctionDef { id: 57, name: "Train_VoidRay_quick", ftype: FunctionType::RawCmd, ability_id: 950, general_id: 0, avail: None },
    FunctionDef { id: 76, name: "TrainWarp_Adept_pt", ftype: FunctionType::RawCmdPt, ability_id: 1419, general_id: 0, avail: None },
    FunctionDef { id: 74, name: "TrainWarp_DarkTemplar_pt", ftype: FunctionType::RawCmdPt, ability_id: 1417, general_id: 0, avail: None },
    FunctionDef { id: 73, name: "TrainWarp_HighTemplar_pt", ftype: FunctionType::RawCmdPt, ability_id: 1416, general_id: 0, avail: None },
    FunctionDef { id: 60, name: "Train_WarpPrism_quick", ftype: FunctionType::RawCmd, ability_id: 976, general_id: 0, avail: None },
    FunctionDef { id: 75, name: "TrainWarp_Sentry_pt", ftype: FunctionType::RawCmdPt, ability_id: 1418, general_id: 0, avail: None },
    FunctionDef { id: 72, name: "TrainWarp_Stalker_pt", ftype: FunctionType::RawCmdPt, ability_id: 1414, general_id: 0, avail: None },
    FunctionDef { id: 71, name: "TrainWarp_Zealot_pt", ftype: FunctionType::RawCmdPt, ability_id: 1413, general_id: 0, avail: None },
    FunctionDef { id: 527, name: "Train_WidowMine_quick", ftype: FunctionType::RawCmd, ability_id: 614, general_id: 0, avail: None },
    FunctionDef { id: 49, name: "Train_Zealot_quick", ftype: FunctionType::RawCmd, ability_id: 916, general_id: 0, avail: None },
    FunctionDef { id: 528, name: "Train_Zergling_quick", ftype: FunctionType::RawCmd, ability_id: 1343, general_id: 0, avail: None },
    FunctionDef { id: 529, name: "UnloadAllAt_Medivac_pt", ftype: FunctionType::RawCmdPt, ability_id: 396, general_id: 3669, avail: None },
    FunctionDef { id: 530, name: "UnloadAllAt_Medivac_unit", ftype: FunctionType::RawCmdUnit, ability_id: 396, general_id: 3669, avail: None },
    FunctionDef { id: 531, name: "UnloadAllAt_Overlord_pt", ftype: FunctionType::RawCmdPt, ability_id: 1408, general_id: 3669, avail: None },
    FunctionDef { id: 532, name: "UnloadAllAt_Overlord_unit", ftype: FunctionType::RawCmdUnit, ability_id: 1408, general_id: 3669, avail: None },
    FunctionDef { id: 105, name: "UnloadAllAt_pt", ftype: FunctionType::RawCmdPt, ability_id: 3669, general_id: 0, avail: None },
    FunctionDef { id: 164, name: "UnloadAllAt_unit", ftype: FunctionType::RawCmdUnit, ability_id: 3669, general_id: 0, avail: None },
    FunctionDef { id: 156, name: "UnloadAllAt_WarpPrism_pt", ftype: FunctionType::RawCmdPt, ability_id: 913, general_id: 3669, avail: None },
    FunctionDef { id: 163, name: "UnloadAllAt_WarpPrism_unit", ftype: FunctionType::RawCmdUnit, ability_id: 913, general_id: 3669, avail: None },
    FunctionDef { id: 533, name: "UnloadAll_Bunker_quick", ftype: FunctionType::RawCmd, ability_id: 408, general_id: 3664, avail: None },
    FunctionDef { id: 534, name: "UnloadAll_CommandCenter_quick", ftype: FunctionType::RawCmd, ability_id: 413, general_id: 3664, avail: None },
    FunctionDef { id: 535, name: "UnloadAll_NydusNetwork_quick", ftype: FunctionType::RawCmd, ability_id: 1438, general_id: 3664, avail: None },
    FunctionDef { id: 536, name: "UnloadAll_NydusWorm_quick", ftype: FunctionType::RawCmd, ability_id: 2371, general_id: 3664, avail: None },
    FunctionDef { id: 100, name: "UnloadAll_quick", ftype: FunctionType::RawCmd, ability_id: 3664, general_id: 0, avail: None },
    FunctionDef { id: 556, name: "UnloadUnit_quick", ftype: FunctionType::RawCmd, ability_id: 3796, general_id: 0, avail: None },
    FunctionDef { id: 557, name: "UnloadUnit_Bunker_quick", ftype: FunctionType::RawCmd, ability_id: 410, general_id: 3796, avail: None },
    FunctionDef { id: 558, name: "UnloadUnit_CommandCenter_quick", ftype: FunctionType::RawCmd, ability_id: 415, general_id: 3796, avail: None },
    FunctionDef { id: 559, name: "UnloadUnit_Medivac_quick", ftype: FunctionType::RawCmd, ability_id: 397, general_id: 3796, avail: None },
    FunctionDef { id: 560, name: "UnloadUnit_NydusNetwork_quick", ftype: FunctionType::RawCmd, ability_id: 1440, general_id: 3796, avail: None },
    FunctionDef { id: 561, name: "UnloadUnit_Overlord_quick", ftype: FunctionType::RawCmd, ability_id: 1409, general_id: 3796, avail: None },
    FunctionDef { id: 562, name: "UnloadUnit_WarpPrism_quick", ftype: FunctionType::RawCmd, ability_id: 914, general_id: 3796, avail: None },
];
