use hrg_core::{GasError, PdgCode};
use hrg_gas::{
    GraphTolerances, GridPoint, QuantumStatistics, SpeciesCollection, SpeciesInput, ThermalModel,
};
use hrg_sweep::StatisticalModel;

fn gas_input(
    pdg: i32,
    mass: f64,
    degeneracy: f64,
    statistics: QuantumStatistics,
    baryon: i32,
) -> SpeciesInput {
    SpeciesInput {
        pdg: PdgCode::from_raw(pdg),
        name: format!("species-{pdg}"),
        mass,
        degeneracy,
        statistics,
        stable: true,
        baryon,
        strangeness: 0,
        decays: Vec::new(),
    }
}

fn record(input: SpeciesInput) -> hrg_gas::SpeciesRecord {
    let collection = SpeciesCollection::build(&[input], &GraphTolerances::default()).unwrap();
    collection.species(0).clone()
}

fn point(temperature: f64, mu_baryon: f64) -> GridPoint {
    GridPoint {
        temperature,
        mu_baryon,
        mu_strange: 0.0,
    }
}

#[test]
fn boltzmann_pressure_is_ideal() {
    let model = StatisticalModel::default();
    let pion = record(gas_input(211, 0.13957, 1.0, QuantumStatistics::Boltzmann, 0));
    let densities = model.compute_densities(&pion, &point(0.150, 0.0)).unwrap();
    assert!(densities.number > 0.0);
    let relative = (densities.pressure - densities.number * 0.150).abs() / densities.pressure;
    assert!(relative < 1.0e-12, "P deviates from nT by {relative}");
}

#[test]
fn heavier_species_are_rarer() {
    let model = StatisticalModel::default();
    let grid_point = point(0.150, 0.0);
    let light = record(gas_input(211, 0.13957, 1.0, QuantumStatistics::Boltzmann, 0));
    let heavy = record(gas_input(2212, 0.93827, 1.0, QuantumStatistics::Boltzmann, 0));
    let n_light = model.compute_densities(&light, &grid_point).unwrap().number;
    let n_heavy = model.compute_densities(&heavy, &grid_point).unwrap().number;
    assert!(n_heavy < n_light);
}

#[test]
fn quantum_corrections_have_the_expected_sign() {
    let model = StatisticalModel::default();
    let grid_point = point(0.150, 0.0);
    let boltzmann = record(gas_input(1, 0.13957, 1.0, QuantumStatistics::Boltzmann, 0));
    let bose = record(gas_input(2, 0.13957, 1.0, QuantumStatistics::BoseEinstein, 0));
    let fermi = record(gas_input(3, 0.13957, 1.0, QuantumStatistics::FermiDirac, 0));

    let n_boltzmann = model.compute_densities(&boltzmann, &grid_point).unwrap().number;
    let n_bose = model.compute_densities(&bose, &grid_point).unwrap().number;
    let n_fermi = model.compute_densities(&fermi, &grid_point).unwrap().number;

    assert!(n_fermi < n_boltzmann, "Pauli blocking must suppress fermions");
    assert!(n_bose > n_boltzmann, "Bose enhancement must boost bosons");
}

#[test]
fn baryon_potential_enhances_baryons() {
    let model = StatisticalModel::default();
    let proton = record(gas_input(2212, 0.93827, 2.0, QuantumStatistics::FermiDirac, 1));
    let without = model.compute_densities(&proton, &point(0.150, 0.0)).unwrap();
    let with = model.compute_densities(&proton, &point(0.150, 0.3)).unwrap();
    assert!(with.number > without.number);
}

#[test]
fn massless_boson_matches_the_analytic_limit() {
    let model = StatisticalModel::default();
    let photon_like = record(gas_input(90, 0.0, 2.0, QuantumStatistics::BoseEinstein, 0));
    let temperature = 0.150;
    let densities = model
        .compute_densities(&photon_like, &point(temperature, 0.0))
        .unwrap();
    // g T^3 zeta(3) / pi^2, with the truncation of the cluster expansion
    // accounting for the sub-percent deficit.
    let analytic = 2.0 * temperature.powi(3) * 1.202056903159594 / std::f64::consts::PI.powi(2);
    let relative = (densities.number - analytic).abs() / analytic;
    assert!(relative < 5.0e-3, "massless limit off by {relative}");
    assert!(densities.number < analytic);
}

#[test]
fn entropy_identity_holds() {
    let model = StatisticalModel::default();
    let kaon = record(gas_input(321, 0.49368, 1.0, QuantumStatistics::BoseEinstein, 0));
    let grid_point = point(0.160, 0.0);
    let densities = model.compute_densities(&kaon, &grid_point).unwrap();
    let reconstructed = (densities.energy + densities.pressure) / grid_point.temperature;
    assert_eq!(densities.entropy, reconstructed);
}

#[test]
fn non_positive_temperature_is_rejected() {
    let model = StatisticalModel::default();
    let pion = record(gas_input(211, 0.13957, 1.0, QuantumStatistics::Boltzmann, 0));
    for temperature in [0.0, -0.1] {
        let err = model
            .compute_densities(&pion, &point(temperature, 0.0))
            .unwrap_err();
        assert!(
            matches!(&err, GasError::Argument(info) if info.code == "non-positive-temperature")
        );
    }
}

#[test]
fn bose_condensation_is_reported() {
    let model = StatisticalModel::default();
    let boson = record(gas_input(5, 0.2, 1.0, QuantumStatistics::BoseEinstein, 1));
    let err = model.compute_densities(&boson, &point(0.150, 0.5)).unwrap_err();
    assert!(matches!(&err, GasError::Thermal(info) if info.code == "bose-condensation"));
}

#[test]
fn expansion_needs_at_least_one_term() {
    let err = StatisticalModel::new(0).unwrap_err();
    assert!(
        matches!(&err, GasError::Argument(info) if info.code == "non-positive-expansion-order")
    );
    assert_eq!(StatisticalModel::new(10).unwrap(), StatisticalModel::default());
}

#[test]
fn evaluation_is_deterministic() {
    let model = StatisticalModel::default();
    let proton = record(gas_input(2212, 0.93827, 2.0, QuantumStatistics::FermiDirac, 1));
    let grid_point = point(0.155, 0.25);
    let first = model.compute_densities(&proton, &grid_point).unwrap();
    let second = model.compute_densities(&proton, &grid_point).unwrap();
    assert_eq!(first, second);
}
