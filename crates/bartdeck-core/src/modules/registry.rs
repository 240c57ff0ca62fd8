//! Named setters for every recognized deck parameter.
//!
//! Each setter forwards its value, unchecked, to [`ParameterStore::register`]
//! under the field's fixed label.

use super::store::ParameterStore;
use crate::domain::{Field, ParamValue};

impl ParameterStore {
    pub fn set_discretization(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::Discretization, value);
    }

    pub fn set_eigenvalue_problem(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::EigenvalueProblem, value);
    }

    pub fn set_fe_polynomial_degree(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::FePolynomialDegree, value);
    }

    pub fn set_first_thermal_group(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::FirstThermalGroup, value);
    }

    pub fn set_have_reflective_bc(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::HaveReflectiveBc, value);
    }

    pub fn set_n_cells(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::NCells, value);
    }

    pub fn set_n_energy_groups(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::NEnergyGroups, value);
    }

    pub fn set_output_filename_base(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::OutputFilenameBase, value);
    }

    pub fn set_reflective_boundary(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::ReflectiveBoundary, value);
    }

    pub fn set_spatial_dimension(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::SpatialDimension, value);
    }

    pub fn set_spatial_max(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::SpatialMax, value);
    }

    pub fn set_transport_model(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::TransportModel, value);
    }

    // Mesh
    pub fn set_mesh_generated(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::MeshGenerated, value);
    }

    pub fn set_mesh_filename(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::MeshFilename, value);
    }

    pub fn set_uniform_refinements(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::UniformRefinements, value);
    }

    pub fn set_fuel_pin_radius(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::FuelPinRadius, value);
    }

    pub fn set_fuel_pin_triangulation(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::FuelPinTriangulation, value);
    }

    pub fn set_mesh_pin_resolved(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::MeshPinResolved, value);
    }

    // Material parameters
    pub fn set_material_subsection(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::MaterialSubsection, value);
    }

    pub fn set_material_map_filename(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::MaterialMapFilename, value);
    }

    pub fn set_material_filenames(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::MaterialFilenames, value);
    }

    pub fn set_number_of_materials(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::NumberOfMaterials, value);
    }

    pub fn set_fuel_pin_material_map_filename(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::FuelPinMaterialMapFilename, value);
    }

    // Acceleration
    pub fn set_preconditioner(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::Preconditioner, value);
    }

    pub fn set_bssor_factor(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::BssorFactor, value);
    }

    pub fn set_do_nda(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::DoNda, value);
    }

    pub fn set_nda_discretization(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::NdaDiscretization, value);
    }

    pub fn set_nda_linear_solver(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::NdaLinearSolver, value);
    }

    pub fn set_nda_preconditioner(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::NdaPreconditioner, value);
    }

    pub fn set_nda_bssor_factor(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::NdaBssorFactor, value);
    }

    // Solvers
    pub fn set_eigen_solver(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::EigenSolver, value);
    }

    pub fn set_in_group_solver(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::InGroupSolver, value);
    }

    pub fn set_linear_solver(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::LinearSolver, value);
    }

    pub fn set_multi_group_solver(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::MultiGroupSolver, value);
    }

    // Angular quadrature
    pub fn set_angular_quad(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::AngularQuad, value);
    }

    pub fn set_angular_quad_order(&mut self, value: impl Into<ParamValue>) {
        self.set(Field::AngularQuadOrder, value);
    }
}
