/// Fixed grouping of canonical libraries for report presentation. Only
/// presentation reads this; classification never consults it.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub libraries: &'static [&'static str],
}

pub static CATEGORIES: &[Category] = &[
    Category {
        name: "Distributed Dense",
        libraries: &["ScaLAPACK", "SLATE", "DPLASMA", "ELPA", "DLA-Future"],
    },
    Category {
        name: "GPU Libraries",
        libraries: &["cuSolverMp", "cuBLASMp", "cuBLAS", "cuSOLVER"],
    },
    Category {
        name: "Sparse Libraries",
        libraries: &["SuperLU", "SuperLU_DIST", "MUMPS", "PARDISO", "PEXSI", "CHOLMOD", "PaStiX"],
    },
    Category {
        name: "Eigenvalue Libraries",
        libraries: &["SLEPc", "ChASE", "ELSI"],
    },
    Category {
        name: "General Purpose",
        libraries: &["LAPACK", "BLAS", "Intel MKL", "OpenBLAS", "ATLAS", "GotoBLAS", "ACML", "ESSL", "PLASMA", "Ginkgo"],
    },
    Category {
        name: "Specialized",
        libraries: &["NTPoly", "CheSS", "PETSc", "Trilinos", "Libint", "Libxc"],
    },
    Category {
        name: "Applications",
        libraries: &[
            "NTChem",
            "Quantum ESPRESSO",
            "Yambo",
            "libNEGF",
            "CP2K",
            "SIESTA",
            "FHI-AIMS",
            "CASTEP",
            "DFTB+",
            "Principle modes",
        ],
    },
];

/// The category a library belongs to, if the taxonomy places it.
pub fn category_of(library: &str) -> Option<&'static Category> {
    CATEGORIES
        .iter()
        .find(|category| category.libraries.iter().any(|candidate| *candidate == library))
}
