use hrg_core::{ErrorInfo, GasError, PdgCode, ThermalDensities};
use hrg_gas::{
    DecayChannel, GraphTolerances, GridPoint, QuantumStatistics, SpeciesCollection, SpeciesInput,
    SpeciesRecord, ThermalModel,
};
use hrg_sweep::{enumerate_grid, observables_hash, run_sweep, AxisSpec, PointStatus, SweepConfig};

fn small_gas() -> SpeciesCollection {
    let inputs = vec![
        SpeciesInput {
            pdg: PdgCode::from_raw(211),
            name: "pi+".to_string(),
            mass: 0.13957,
            degeneracy: 1.0,
            statistics: QuantumStatistics::Boltzmann,
            stable: true,
            baryon: 0,
            strangeness: 0,
            decays: Vec::new(),
        },
        SpeciesInput {
            pdg: PdgCode::from_raw(-211),
            name: "pi-".to_string(),
            mass: 0.13957,
            degeneracy: 1.0,
            statistics: QuantumStatistics::Boltzmann,
            stable: true,
            baryon: 0,
            strangeness: 0,
            decays: Vec::new(),
        },
        SpeciesInput {
            pdg: PdgCode::from_raw(113),
            name: "rho0".to_string(),
            mass: 0.77526,
            degeneracy: 3.0,
            statistics: QuantumStatistics::Boltzmann,
            stable: false,
            baryon: 0,
            strangeness: 0,
            decays: vec![DecayChannel {
                branching_ratio: 1.0,
                daughters: vec![PdgCode::from_raw(211), PdgCode::from_raw(-211)],
            }],
        },
    ];
    SpeciesCollection::build(&inputs, &GraphTolerances::default()).unwrap()
}

fn config(temperature_steps: usize, concurrency: usize) -> SweepConfig {
    SweepConfig {
        temperature: AxisSpec {
            start: 0.120,
            stop: 0.160,
            steps: temperature_steps,
        },
        mu_baryon: AxisSpec::fixed(0.0),
        mu_strange: AxisSpec::fixed(0.0),
        concurrency,
        ..SweepConfig::default()
    }
}

/// Thermal stand-in that fails at one temperature so point isolation can be
/// observed.
struct PoisonedModel {
    inner: hrg_sweep::StatisticalModel,
    poisoned_temperature: f64,
}

impl ThermalModel for PoisonedModel {
    fn compute_densities(
        &self,
        species: &SpeciesRecord,
        point: &GridPoint,
    ) -> Result<ThermalDensities, GasError> {
        if (point.temperature - self.poisoned_temperature).abs() < 1.0e-12 {
            return Err(GasError::Thermal(
                ErrorInfo::new("non-finite-density", "synthetic failure for testing")
                    .with_context("species", species.pdg()),
            ));
        }
        self.inner.compute_densities(species, point)
    }
}

#[test]
fn grid_enumeration_is_temperature_major() {
    let config = SweepConfig {
        temperature: AxisSpec {
            start: 0.1,
            stop: 0.2,
            steps: 2,
        },
        mu_baryon: AxisSpec {
            start: 0.0,
            stop: 0.1,
            steps: 2,
        },
        mu_strange: AxisSpec::fixed(0.0),
        ..SweepConfig::default()
    };
    let points = enumerate_grid(&config);
    assert_eq!(points.len(), 4);
    assert_eq!(points[0].temperature, 0.1);
    assert_eq!(points[0].mu_baryon, 0.0);
    assert_eq!(points[1].temperature, 0.1);
    assert_eq!(points[1].mu_baryon, 0.1);
    assert_eq!(points[2].temperature, 0.2);
    assert_eq!(points[2].mu_baryon, 0.0);
}

#[test]
fn failed_point_does_not_abort_the_sweep() {
    let collection = small_gas();
    let model = PoisonedModel {
        inner: hrg_sweep::StatisticalModel::default(),
        poisoned_temperature: 0.140,
    };
    let report = run_sweep(&collection, &model, &config(3, 2)).unwrap();

    assert_eq!(report.manifest.points_total, 3);
    assert_eq!(report.manifest.points_failed, 1);
    for outcome in &report.outcomes {
        let failed = (outcome.point.temperature - 0.140).abs() < 1.0e-12;
        match (&outcome.status, failed) {
            (PointStatus::Failed { error }, true) => {
                assert!(outcome.observables.is_none());
                assert!(error.contains("non-finite-density"), "unexpected error {error}");
            }
            (PointStatus::Complete, false) => assert!(outcome.observables.is_some()),
            (status, _) => panic!(
                "point at T={} had unexpected status {status:?}",
                outcome.point.temperature
            ),
        }
    }
}

#[test]
fn outcomes_are_reported_in_grid_order() {
    let collection = small_gas();
    let model = hrg_sweep::StatisticalModel::default();
    let report = run_sweep(&collection, &model, &config(5, 4)).unwrap();
    let points = enumerate_grid(&config(5, 4));
    for (index, outcome) in report.outcomes.iter().enumerate() {
        assert_eq!(outcome.index, index);
        assert_eq!(outcome.point, points[index]);
    }
}

#[test]
fn sweeps_are_deterministic_across_concurrency() {
    let collection = small_gas();
    let model = hrg_sweep::StatisticalModel::default();
    let serial = run_sweep(&collection, &model, &config(4, 1)).unwrap();
    let parallel = run_sweep(&collection, &model, &config(4, 4)).unwrap();

    assert_eq!(serial.outcomes, parallel.outcomes);
    assert_eq!(
        serial.manifest.observables_hash,
        parallel.manifest.observables_hash
    );
    assert_eq!(
        observables_hash(&serial.outcomes).unwrap(),
        serial.manifest.observables_hash
    );
}

#[test]
fn resolved_stable_densities_feed_the_report() {
    let collection = small_gas();
    let model = hrg_sweep::StatisticalModel::default();
    let report = run_sweep(&collection, &model, &config(1, 1)).unwrap();
    let observables = report.outcomes[0].observables.as_ref().unwrap();

    // Every pion receives a rho0 feed-down on top of its thermal density, so
    // the stable density must exceed the primordial one of the pion alone.
    let grid_point = enumerate_grid(&config(1, 1))[0];
    let pion = collection.species(0).clone();
    let primordial = model.compute_densities(&pion, &grid_point).unwrap().number;
    assert!(observables.rho1[0] > primordial);
}
