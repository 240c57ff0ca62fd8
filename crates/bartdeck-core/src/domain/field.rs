use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    Problem,
    Mesh,
    Material,
    Acceleration,
    Solver,
    AngularQuadrature,
}

impl FieldGroup {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Problem => "problem",
            Self::Mesh => "mesh",
            Self::Material => "material",
            Self::Acceleration => "acceleration",
            Self::Solver => "solver",
            Self::AngularQuadrature => "angular quadrature",
        }
    }
}

impl Display for FieldGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Every parameter the solver deck recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Discretization,
    EigenvalueProblem,
    FePolynomialDegree,
    FirstThermalGroup,
    HaveReflectiveBc,
    NCells,
    NEnergyGroups,
    OutputFilenameBase,
    ReflectiveBoundary,
    SpatialDimension,
    SpatialMax,
    TransportModel,
    MeshGenerated,
    MeshFilename,
    UniformRefinements,
    FuelPinRadius,
    FuelPinTriangulation,
    MeshPinResolved,
    MaterialSubsection,
    MaterialMapFilename,
    MaterialFilenames,
    NumberOfMaterials,
    FuelPinMaterialMapFilename,
    Preconditioner,
    BssorFactor,
    DoNda,
    NdaDiscretization,
    NdaLinearSolver,
    NdaPreconditioner,
    NdaBssorFactor,
    EigenSolver,
    InGroupSolver,
    LinearSolver,
    MultiGroupSolver,
    AngularQuad,
    AngularQuadOrder,
}

impl Field {
    pub const ALL: [Field; 36] = [
        Self::Discretization,
        Self::EigenvalueProblem,
        Self::FePolynomialDegree,
        Self::FirstThermalGroup,
        Self::HaveReflectiveBc,
        Self::NCells,
        Self::NEnergyGroups,
        Self::OutputFilenameBase,
        Self::ReflectiveBoundary,
        Self::SpatialDimension,
        Self::SpatialMax,
        Self::TransportModel,
        Self::MeshGenerated,
        Self::MeshFilename,
        Self::UniformRefinements,
        Self::FuelPinRadius,
        Self::FuelPinTriangulation,
        Self::MeshPinResolved,
        Self::MaterialSubsection,
        Self::MaterialMapFilename,
        Self::MaterialFilenames,
        Self::NumberOfMaterials,
        Self::FuelPinMaterialMapFilename,
        Self::Preconditioner,
        Self::BssorFactor,
        Self::DoNda,
        Self::NdaDiscretization,
        Self::NdaLinearSolver,
        Self::NdaPreconditioner,
        Self::NdaBssorFactor,
        Self::EigenSolver,
        Self::InGroupSolver,
        Self::LinearSolver,
        Self::MultiGroupSolver,
        Self::AngularQuad,
        Self::AngularQuadOrder,
    ];

    /// Label written on the left-hand side of the deck line.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Discretization => "ho spatial discretization",
            Self::EigenvalueProblem => "do eigenvalue calculations",
            Self::FePolynomialDegree => "finite element polynomial degree",
            Self::FirstThermalGroup => "thermal group boundary",
            Self::HaveReflectiveBc => "have reflective boundary",
            Self::NCells => "number of cells for x, y, z directions",
            Self::NEnergyGroups => "number of groups",
            Self::OutputFilenameBase => "output file name base",
            Self::ReflectiveBoundary => "reflective boundary names",
            Self::SpatialDimension => "problem dimension",
            Self::SpatialMax => "x, y, z max values of boundary locations",
            Self::TransportModel => "transport model",
            Self::MeshGenerated => "is mesh generated by deal.II",
            Self::MeshFilename => "mesh file name",
            Self::UniformRefinements => "uniform refinements",
            Self::FuelPinRadius => "fuel Pin radius",
            Self::FuelPinTriangulation => "triangulation type of fuel Pin",
            Self::MeshPinResolved => "is mesh pin-resolved",
            Self::MaterialSubsection => "material ID map",
            Self::MaterialMapFilename => "material id file name",
            Self::MaterialFilenames => "material id file name map",
            Self::NumberOfMaterials => "number of materials",
            Self::FuelPinMaterialMapFilename => "fuel pin material id file name",
            Self::Preconditioner => "ho preconditioner name",
            Self::BssorFactor => "ho ssor factor",
            Self::DoNda => "do nda",
            Self::NdaDiscretization => "nda spatial discretization",
            Self::NdaLinearSolver => "nda linear solver name",
            Self::NdaPreconditioner => "nda preconditioner name",
            Self::NdaBssorFactor => "nda ssor factor",
            Self::EigenSolver => "eigen solver name",
            Self::InGroupSolver => "in group solver name",
            Self::LinearSolver => "ho linear solver name",
            Self::MultiGroupSolver => "mg solver name",
            Self::AngularQuad => "angular quadrature name",
            Self::AngularQuadOrder => "angular quadrature order",
        }
    }

    /// Identifier used by case files and the `fields` listing.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Discretization => "discretization",
            Self::EigenvalueProblem => "eigenvalue_problem",
            Self::FePolynomialDegree => "fe_polynomial_degree",
            Self::FirstThermalGroup => "first_thermal_group",
            Self::HaveReflectiveBc => "have_reflective_bc",
            Self::NCells => "n_cells",
            Self::NEnergyGroups => "n_energy_groups",
            Self::OutputFilenameBase => "output_filename_base",
            Self::ReflectiveBoundary => "reflective_boundary",
            Self::SpatialDimension => "spatial_dimension",
            Self::SpatialMax => "spatial_max",
            Self::TransportModel => "transport_model",
            Self::MeshGenerated => "mesh_generated",
            Self::MeshFilename => "mesh_filename",
            Self::UniformRefinements => "uniform_refinements",
            Self::FuelPinRadius => "fuel_pin_radius",
            Self::FuelPinTriangulation => "fuel_pin_triangulation",
            Self::MeshPinResolved => "mesh_pin_resolved",
            Self::MaterialSubsection => "material_subsection",
            Self::MaterialMapFilename => "material_map_filename",
            Self::MaterialFilenames => "material_filenames",
            Self::NumberOfMaterials => "number_of_materials",
            Self::FuelPinMaterialMapFilename => "fuel_pin_material_map_filename",
            Self::Preconditioner => "preconditioner",
            Self::BssorFactor => "bssor_factor",
            Self::DoNda => "do_nda",
            Self::NdaDiscretization => "nda_discretization",
            Self::NdaLinearSolver => "nda_linear_solver",
            Self::NdaPreconditioner => "nda_preconditioner",
            Self::NdaBssorFactor => "nda_bssor_factor",
            Self::EigenSolver => "eigen_solver",
            Self::InGroupSolver => "in_group_solver",
            Self::LinearSolver => "linear_solver",
            Self::MultiGroupSolver => "multi_group_solver",
            Self::AngularQuad => "angular_quad",
            Self::AngularQuadOrder => "angular_quad_order",
        }
    }

    pub const fn group(self) -> FieldGroup {
        match self {
            Self::Discretization
            | Self::EigenvalueProblem
            | Self::FePolynomialDegree
            | Self::FirstThermalGroup
            | Self::HaveReflectiveBc
            | Self::NCells
            | Self::NEnergyGroups
            | Self::OutputFilenameBase
            | Self::ReflectiveBoundary
            | Self::SpatialDimension
            | Self::SpatialMax
            | Self::TransportModel => FieldGroup::Problem,
            Self::MeshGenerated
            | Self::MeshFilename
            | Self::UniformRefinements
            | Self::FuelPinRadius
            | Self::FuelPinTriangulation
            | Self::MeshPinResolved => FieldGroup::Mesh,
            Self::MaterialSubsection
            | Self::MaterialMapFilename
            | Self::MaterialFilenames
            | Self::NumberOfMaterials
            | Self::FuelPinMaterialMapFilename => FieldGroup::Material,
            Self::Preconditioner
            | Self::BssorFactor
            | Self::DoNda
            | Self::NdaDiscretization
            | Self::NdaLinearSolver
            | Self::NdaPreconditioner
            | Self::NdaBssorFactor => FieldGroup::Acceleration,
            Self::EigenSolver
            | Self::InGroupSolver
            | Self::LinearSolver
            | Self::MultiGroupSolver => FieldGroup::Solver,
            Self::AngularQuad | Self::AngularQuadOrder => FieldGroup::AngularQuadrature,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.key().eq_ignore_ascii_case(normalized))
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).label())
    }
}
