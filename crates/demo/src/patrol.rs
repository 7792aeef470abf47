//! Patrol robot: blackboard, leaf actions and the tree that drives them.
//!
//! The robot walks a route of waypoints, spending charge on every step. When
//! the battery runs low the recharge branch preempts the walk until the
//! battery is full again, then the walk resumes where it left off. The
//! `charging` flag keeps the recharge branch selected until the battery is
//! full.

use anyhow::{Result, bail};
use behavior_tree::builder::{action, condition, inverter, selector, sequencer};
use behavior_tree::{Action, Behavior, BehaviorTree, Status};

use crate::config::DemoConfig;

const FULL_CHARGE: u8 = 100;
const LOW_CHARGE: u8 = 20;
const STEP_COST: u8 = 12;
const CHARGE_RATE: u8 = 30;
/// Steps between two consecutive waypoints.
const SEGMENT_LENGTH: u32 = 3;

/// Shared state ticked through the tree.
#[derive(Debug, Clone)]
pub struct Robot {
    pub battery: u8,
    pub waypoints: u32,
    pub visited: u32,
    pub recharges: u32,
    /// Set while a recharge is in progress.
    pub charging: bool,
}

impl Robot {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            battery: config.battery.min(FULL_CHARGE),
            waypoints: config.waypoints,
            visited: 0,
            recharges: 0,
            charging: false,
        }
    }

    pub fn battery_low(&self) -> bool {
        self.battery < LOW_CHARGE
    }

    /// Low battery, or a recharge already under way.
    pub fn needs_charge(&self) -> bool {
        self.battery_low() || self.charging
    }

    pub fn route_done(&self) -> bool {
        self.visited >= self.waypoints
    }
}

/// Charges until full. Running while charging.
#[derive(Default)]
pub struct Recharge;

impl Action<Robot> for Recharge {
    fn tick(&mut self, robot: &mut Robot) -> Status {
        robot.battery = robot.battery.saturating_add(CHARGE_RATE).min(FULL_CHARGE);
        if robot.battery < FULL_CHARGE {
            robot.charging = true;
            return Status::Running;
        }
        robot.charging = false;
        robot.recharges += 1;
        tracing::info!(recharges = robot.recharges, "battery full");
        Status::Success
    }

    fn name(&self) -> &str {
        "recharge"
    }
}

/// Walks the route one step per tick.
///
/// Progress within the current segment lives here; completed waypoints are
/// published on the blackboard.
#[derive(Default)]
pub struct FollowRoute {
    segment_steps: u32,
}

impl Action<Robot> for FollowRoute {
    fn tick(&mut self, robot: &mut Robot) -> Status {
        if robot.route_done() {
            return Status::Success;
        }
        if robot.battery < STEP_COST {
            tracing::warn!(battery = robot.battery, "stranded");
            return Status::Failure;
        }

        robot.battery -= STEP_COST;
        self.segment_steps += 1;
        if self.segment_steps == SEGMENT_LENGTH {
            self.segment_steps = 0;
            robot.visited += 1;
            tracing::info!(
                waypoint = robot.visited,
                battery = robot.battery,
                "reached waypoint"
            );
        }

        if robot.route_done() {
            Status::Success
        } else {
            Status::Running
        }
    }

    fn name(&self) -> &str {
        "follow_route"
    }
}

/// `sequencer[ selector[ !needs_charge, recharge ], follow_route ]`
pub fn build_tree() -> behavior_tree::Result<Box<dyn Behavior<Robot>>> {
    sequencer(vec![
        selector(vec![
            inverter(condition(Robot::needs_charge)),
            action(Recharge),
        ])?,
        action(FollowRoute::default()),
    ])
}

/// Outcome of a finished patrol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatrolReport {
    pub ticks: u64,
    pub recharges: u32,
    pub battery: u8,
}

/// Ticks the patrol tree until it settles or the tick budget runs out.
pub fn run(config: &DemoConfig) -> Result<PatrolReport> {
    let mut tree = BehaviorTree::new(build_tree()?);
    let mut robot = Robot::new(config);

    for _ in 0..config.max_ticks {
        let status = tree.tick(&mut robot);
        tracing::debug!(
            tick = tree.tick_count(),
            ?status,
            battery = robot.battery,
            visited = robot.visited,
            "tick"
        );

        match status {
            Status::Running => continue,
            Status::Success => {
                return Ok(PatrolReport {
                    ticks: tree.tick_count(),
                    recharges: robot.recharges,
                    battery: robot.battery,
                });
            }
            Status::Failure => bail!(
                "patrol failed at tick {} ({} of {} waypoints)",
                tree.tick_count(),
                robot.visited,
                robot.waypoints
            ),
        }
    }

    bail!(
        "patrol still running after {} ticks ({} of {} waypoints)",
        config.max_ticks,
        robot.visited,
        robot.waypoints
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_patrol_recharges_once() {
        let report = run(&DemoConfig::default()).unwrap();

        assert_eq!(
            report,
            PatrolReport {
                ticks: 11,
                recharges: 1,
                battery: 76,
            }
        );
    }

    #[test]
    fn flat_battery_charges_before_walking() {
        let config = DemoConfig {
            battery: 0,
            ..DemoConfig::default()
        };
        let report = run(&config).unwrap();

        assert_eq!(report.ticks, 14);
        assert_eq!(report.recharges, 2);
    }

    #[test]
    fn tick_budget_exhaustion_is_an_error() {
        let config = DemoConfig {
            max_ticks: 4,
            ..DemoConfig::default()
        };
        let err = run(&config).unwrap_err();
        assert!(err.to_string().contains("still running after 4 ticks"));
    }

    #[test]
    fn recharge_preempts_walking() {
        let mut tree = build_tree().unwrap();
        let mut robot = Robot {
            battery: 10,
            waypoints: 1,
            visited: 0,
            recharges: 0,
            charging: false,
        };

        assert_eq!(tree.tick(&mut robot), Status::Running);
        assert_eq!(robot.battery, 40);
        assert_eq!(robot.visited, 0);
        assert!(robot.charging);
    }

    #[test]
    fn recharge_holds_until_full_before_walking_resumes() {
        let mut tree = build_tree().unwrap();
        let mut robot = Robot {
            battery: 10,
            waypoints: 5,
            visited: 0,
            recharges: 0,
            charging: false,
        };

        // 40 and 70 are above the low mark, but the recharge keeps the branch.
        assert_eq!(tree.tick(&mut robot), Status::Running);
        assert_eq!(tree.tick(&mut robot), Status::Running);
        assert_eq!(robot.battery, 70);
        assert_eq!(robot.recharges, 0);

        // Charge tops out, then the walk takes its first step in the same tick.
        assert_eq!(tree.tick(&mut robot), Status::Running);
        assert_eq!(robot.recharges, 1);
        assert!(!robot.charging);
        assert_eq!(robot.battery, FULL_CHARGE - STEP_COST);
    }

    #[test]
    fn stranded_robot_fails() {
        let mut walk = FollowRoute::default();
        let mut robot = Robot {
            battery: STEP_COST - 1,
            waypoints: 2,
            visited: 0,
            recharges: 0,
            charging: false,
        };

        assert_eq!(walk.tick(&mut robot), Status::Failure);
    }
}
