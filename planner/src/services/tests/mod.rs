//! Service tests for the planner
