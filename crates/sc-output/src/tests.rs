//! Integration tests for sc-output.

#[cfg(test)]
mod csv_tests {
    use sc_core::AgentId;
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, ITERATIONS_FILE, TRAJECTORY_FILE};
    use crate::row::{IterationRow, TrajectoryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn traj_row(agent: u32, iteration: u64) -> TrajectoryRow {
        TrajectoryRow { iteration, agent_id: AgentId(agent), x: agent as f64 * 10.0, y: 2.5 }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(TRAJECTORY_FILE).exists());
        assert!(dir.path().join(ITERATIONS_FILE).exists());
    }

    #[test]
    fn missing_directory_is_created() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(TRAJECTORY_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TRAJECTORY_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["iteration", "agent_id", "x", "y"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join(ITERATIONS_FILE)).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["iteration", "best_score", "improved"]);
    }

    #[test]
    fn trajectory_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trajectory(&[traj_row(0, 4), traj_row(1, 4), traj_row(2, 4)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TRAJECTORY_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "4");  // iteration
        assert_eq!(&rows[2][1], "2");  // agent_id
        assert_eq!(&rows[2][2], "20"); // x
        assert_eq!(&rows[2][3], "2.5");
    }

    #[test]
    fn iteration_row_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_iteration(&IterationRow { iteration: 3, best_score: 0.75, improved: true }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(ITERATIONS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "0.75");
        assert_eq!(&rows[0][2], "1");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn empty_trajectory_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trajectory(&[]).unwrap();
    }
}

#[cfg(test)]
mod row_tests {
    use sc_core::{AgentId, Iteration, Position};
    use sc_engine::StepReport;
    use sc_population::Configuration;

    use crate::row::{IterationRow, TrajectoryRow};

    #[test]
    fn layout_rows_follow_agent_order() {
        let layout: Configuration = vec![Position::new(1.0, 2.0), Position::new(3.0, 4.0)].into();
        let rows = TrajectoryRow::from_layout(Iteration(7), &layout);
        assert_eq!(rows, vec![
            TrajectoryRow { iteration: 7, agent_id: AgentId(0), x: 1.0, y: 2.0 },
            TrajectoryRow { iteration: 7, agent_id: AgentId(1), x: 3.0, y: 4.0 },
        ]);
    }

    #[test]
    fn iteration_row_from_report() {
        let report = StepReport { iteration: Iteration(2), best_score: 0.5, improved: false, converged: true };
        assert_eq!(IterationRow::from(&report), IterationRow { iteration: 2, best_score: 0.5, improved: false });
    }
}

#[cfg(test)]
mod observer_tests {
    use sc_core::{Area, SwarmConfig, Variant};
    use sc_engine::{CancelToken, run};
    use sc_population::ScenarioBuilder;

    use crate::csv::{CsvWriter, ITERATIONS_FILE, TRAJECTORY_FILE};
    use crate::observer::TrajectoryObserver;
    use crate::row::{IterationRow, TrajectoryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    #[test]
    fn integration_csv() {
        let dir = tempfile::tempdir().unwrap();
        let config = SwarmConfig { variant: Variant::Dispersive, max_iterations: 6, ..SwarmConfig::default() };
        let mut scenario = ScenarioBuilder::new(Area::new(config.area_side), 9);
        let users = scenario.targets(30);
        let drones = scenario.configuration(3);

        let mut obs = TrajectoryObserver::new(CsvWriter::new(dir.path()).unwrap());
        let outcome = run(users, drones, config, CancelToken::new(), &mut obs).unwrap();
        assert!(obs.take_error().is_none());
        assert_eq!(outcome.iterations, 6);

        // 6 iterations × 3 drones.
        let mut rdr = csv::Reader::from_path(dir.path().join(TRAJECTORY_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 18);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[17][0], "6");

        // The last recorded layout matches the outcome's trajectory.
        let last = &outcome.trajectory[5];
        for (row, p) in rows[15..].iter().zip(last.iter()) {
            assert_eq!(row[2].parse::<f64>().unwrap(), p.x);
            assert_eq!(row[3].parse::<f64>().unwrap(), p.y);
        }

        let mut rdr = csv::Reader::from_path(dir.path().join(ITERATIONS_FILE)).unwrap();
        let scores: Vec<f64> = rdr.records().map(|r| r.unwrap()[1].parse::<f64>().unwrap()).collect();
        assert_eq!(scores.len(), 6);
        assert!(scores.windows(2).all(|w| w[1] >= w[0]));
    }

    /// A writer whose every call fails.
    struct Broken {
        finished: bool,
    }

    impl OutputWriter for Broken {
        fn write_trajectory(&mut self, _rows: &[TrajectoryRow]) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn write_iteration(&mut self, _row: &IterationRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("second failure")))
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept_and_run_completes() {
        let config = SwarmConfig { variant: Variant::Hybrid, max_iterations: 3, ..SwarmConfig::default() };
        let mut scenario = ScenarioBuilder::new(Area::new(config.area_side), 2);
        let users = scenario.targets(10);
        let drones = scenario.configuration(2);

        let mut obs = TrajectoryObserver::new(Broken { finished: false });
        let outcome = run(users, drones, config, CancelToken::new(), &mut obs).unwrap();
        assert!(outcome.iterations > 0);

        // on_iteration_end fires before on_snapshot.
        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("second failure"));
        assert!(obs.take_error().is_none());
        assert!(obs.into_writer().finished);
    }
}
