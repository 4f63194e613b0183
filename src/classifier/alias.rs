use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// How surface variants are matched against field text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Variant matches anywhere inside the value. Permissive: short variants
    /// can hit inside unrelated words.
    Substring,
    /// Variant must be delimited by non-word characters (or the ends of the
    /// value) on both sides.
    WordBoundary,
}

impl Default for MatchMode {
    fn default() -> Self {
        MatchMode::Substring
    }
}

impl MatchMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "substring" => Some(MatchMode::Substring),
            "word-boundary" | "word_boundary" => Some(MatchMode::WordBoundary),
            _ => None,
        }
    }
}

/// One canonical library and the literal spellings that identify it.
#[derive(Debug, Clone, Copy)]
pub struct LibrarySpec {
    pub canonical: &'static str,
    pub variants: &'static [&'static str],
}

/// Closed table of recognizable libraries. Variants are case-sensitive
/// literals; every entry carries at least the native spelling plus its
/// common case and punctuation forms.
pub static LIBRARIES: &[LibrarySpec] = &[
    // Distributed dense
    LibrarySpec { canonical: "ScaLAPACK", variants: &["ScaLAPACK", "scalapack", "SCALAPACK"] },
    LibrarySpec { canonical: "LAPACK", variants: &["LAPACK", "lapack", "Lapack"] },
    LibrarySpec { canonical: "BLAS", variants: &["BLAS", "blas", "Blas"] },
    LibrarySpec { canonical: "SLATE", variants: &["SLATE", "slate", "Slate"] },
    LibrarySpec { canonical: "DPLASMA", variants: &["DPLASMA", "dplasma", "DPlasma"] },
    LibrarySpec { canonical: "ELPA", variants: &["ELPA", "elpa", "Elpa"] },
    LibrarySpec { canonical: "DLA-Future", variants: &["DLA-Future", "dla-future", "DLA_Future", "dla_future"] },
    // GPU
    LibrarySpec { canonical: "cuSolverMp", variants: &["cuSolverMp", "cusolvermp", "CUSOLVERMP"] },
    LibrarySpec { canonical: "cuBLASMp", variants: &["cuBLASMp", "cublasmp", "CUBLASMP"] },
    LibrarySpec { canonical: "cuBLAS", variants: &["cuBLAS", "cublas", "CUBLAS"] },
    LibrarySpec { canonical: "cuSOLVER", variants: &["cuSOLVER", "cusolver", "CUSOLVER"] },
    // Sparse
    LibrarySpec { canonical: "SuperLU", variants: &["SuperLU", "superlu", "SUPERLU"] },
    LibrarySpec { canonical: "SuperLU_DIST", variants: &["SuperLU_DIST", "SuperLU_Dist", "superlu_dist", "SuperLU / SuperLU_DIST"] },
    LibrarySpec { canonical: "MUMPS", variants: &["MUMPS", "mumps", "Mumps"] },
    LibrarySpec { canonical: "PARDISO", variants: &["PARDISO", "pardiso", "Pardiso"] },
    LibrarySpec { canonical: "PEXSI", variants: &["PEXSI", "pexsi", "Pexsi"] },
    LibrarySpec { canonical: "CHOLMOD", variants: &["CHOLMOD", "cholmod", "Cholmod"] },
    LibrarySpec { canonical: "PaStiX", variants: &["PaStiX", "pastix", "PASTIX"] },
    // Eigenvalue
    LibrarySpec { canonical: "SLEPc", variants: &["SLEPc", "slepc", "SLEPC"] },
    LibrarySpec { canonical: "ChASE", variants: &["ChASE", "chase", "CHASE"] },
    LibrarySpec { canonical: "ELSI", variants: &["ELSI", "elsi"] },
    LibrarySpec { canonical: "PETSc", variants: &["PETSc", "petsc", "PETSC"] },
    LibrarySpec { canonical: "Trilinos", variants: &["Trilinos", "trilinos", "TRILINOS"] },
    // General purpose
    LibrarySpec { canonical: "Intel MKL", variants: &["MKL", "mkl", "Intel MKL", "intel mkl", "Intel Math Kernel Library"] },
    LibrarySpec { canonical: "OpenBLAS", variants: &["OpenBLAS", "openblas", "OPENBLAS"] },
    LibrarySpec { canonical: "ATLAS", variants: &["ATLAS", "atlas", "Atlas"] },
    LibrarySpec { canonical: "GotoBLAS", variants: &["GotoBLAS", "gotoblas", "GOTOBLAS"] },
    LibrarySpec { canonical: "ACML", variants: &["ACML", "acml", "Acml"] },
    LibrarySpec { canonical: "ESSL", variants: &["ESSL", "essl", "Essl"] },
    LibrarySpec { canonical: "PLASMA", variants: &["PLASMA", "plasma", "Plasma"] },
    LibrarySpec { canonical: "Ginkgo", variants: &["Ginkgo", "ginkgo", "GINKGO"] },
    // Specialized
    LibrarySpec { canonical: "NTPoly", variants: &["NTPoly", "ntpoly", "NTPOLY"] },
    LibrarySpec { canonical: "CheSS", variants: &["CheSS", "chess", "CHESS"] },
    LibrarySpec { canonical: "Libint", variants: &["Libint", "libint", "LIBINT"] },
    LibrarySpec { canonical: "Libxc", variants: &["Libxc", "libxc", "LIBXC"] },
    // Application codes
    LibrarySpec { canonical: "Quantum ESPRESSO", variants: &["Quantum ESPRESSO", "quantum espresso", "QUANTUM ESPRESSO"] },
    LibrarySpec { canonical: "Yambo", variants: &["Yambo", "yambo", "YAMBO"] },
    LibrarySpec { canonical: "libNEGF", variants: &["libNEGF", "libnegf", "LIBNEGF"] },
    LibrarySpec { canonical: "CP2K", variants: &["CP2K", "cp2k"] },
    LibrarySpec { canonical: "SIESTA", variants: &["SIESTA", "siesta", "Siesta"] },
    LibrarySpec { canonical: "FHI-AIMS", variants: &["FHI-AIMS", "fhi-aims", "FHI_aims", "fhi_aims"] },
    LibrarySpec { canonical: "CASTEP", variants: &["CASTEP", "castep", "Castep"] },
    LibrarySpec { canonical: "DFTB+", variants: &["DFTB+", "dftb+"] },
    LibrarySpec { canonical: "NTChem", variants: &["NTChem", "ntchem", "NTCHEM"] },
    LibrarySpec { canonical: "Principle modes", variants: &["Principle modes", "principle modes", "PRINCIPLE MODES"] },
    // Solver-interface layers
    LibrarySpec { canonical: "LAXlib", variants: &["LAXlib", "laxlib", "LAXLIB"] },
    LibrarySpec { canonical: "KS solvers", variants: &["KS solvers", "ks solvers", "KS SOLVERS"] },
    LibrarySpec { canonical: "ELSI-rci", variants: &["ELSI-rci", "elsi-rci", "ELSI_RCI"] },
];

// Compiled once per process. `\b` anchors misbehave next to variants that end
// in non-word characters (DFTB+), so the boundary is spelled out.
static WORD_BOUNDARY_PATTERNS: Lazy<HashMap<&'static str, Vec<Regex>>> = Lazy::new(|| {
    LIBRARIES
        .iter()
        .map(|spec| {
            let patterns = spec
                .variants
                .iter()
                .map(|v| {
                    Regex::new(&format!(r"(?:^|[^\w]){}(?:[^\w]|$)", regex::escape(v))).unwrap()
                })
                .collect();
            (spec.canonical, patterns)
        })
        .collect()
});

/// Look up a canonical identifier's spec, if the table knows it.
pub fn spec_for(canonical: &str) -> Option<&'static LibrarySpec> {
    LIBRARIES.iter().find(|spec| spec.canonical == canonical)
}

/// All canonical libraries whose variants occur in `text` under `mode`.
pub fn libraries_in(text: &str, mode: MatchMode) -> Vec<&'static str> {
    LIBRARIES
        .iter()
        .filter(|spec| mentions(spec, text, mode))
        .map(|spec| spec.canonical)
        .collect()
}

fn mentions(spec: &LibrarySpec, text: &str, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Substring => spec.variants.iter().any(|v| text.contains(v)),
        MatchMode::WordBoundary => WORD_BOUNDARY_PATTERNS[spec.canonical]
            .iter()
            .any(|re| re.is_match(text)),
    }
}
