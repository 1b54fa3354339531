use thiserror::Error;

macro_rules! topology_error {
    // Single string version
    ($topology:expr, $msg:expr) => {
        crate::Error::InvalidTopology {
            topology: $topology,
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($topology:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidTopology {
            topology: $topology,
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Graph construction in this library distinguishes two failure classes. Self-loops are
/// silently filtered while building a graph and never surface as an error. Everything else
/// (malformed generator parameters, edges referencing absent nodes, unsupported requests)
/// is a precondition violation and aborts the call with one of the variants below.
///
/// # Error Categories
///
/// ## Construction Errors
/// - [`Error::InvalidTopology`] - Generator parameters do not fit the node list
/// - [`Error::MissingEndpoint`] - An edge references a node outside the node set
/// - [`Error::InvalidProbability`] - Random-graph probability outside `[0, 1]`
///
/// ## Query Errors
/// - [`Error::NotSupported`] - The requested computation is not available
/// - [`Error::GraphError`] - Generic graph failure
///
/// # Examples
///
/// ```rust
/// use loopless::{Error, Topology, UndirectedGraph};
///
/// let nodes: Vec<u32> = (1..=7).collect();
/// match UndirectedGraph::generate(Topology::Prism, &nodes) {
///     Ok(graph) => println!("{graph}"),
///     Err(Error::InvalidTopology { topology, message, .. }) => {
///         eprintln!("cannot build {topology}: {message}");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The parameters of a topology generator do not fit the supplied node list.
    ///
    /// Raised for prism graphs with an odd number of nodes or fewer than six nodes,
    /// trees with a branching factor of zero, and meshes or tori where `m * n` differs
    /// from the node count. The error includes the source location where the violation
    /// was detected.
    ///
    /// # Fields
    ///
    /// * `topology` - Name of the topology family that was requested
    /// * `message` - Description of the violated constraint
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Invalid {topology} topology - {file}:{line}: {message}")]
    InvalidTopology {
        /// The topology family that was requested
        topology: &'static str,
        /// The message to be printed for the InvalidTopology error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An edge or arc references a node that is not part of the graph's node set.
    ///
    /// Every endpoint of every edge must be a member of the node set; graphs are built
    /// from both sets together to uphold this.
    #[error("Edge endpoint {0} is not a node of the graph")]
    MissingEndpoint(String),

    /// The probability handed to a random-graph constructor is not within `[0, 1]`.
    #[error("Probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    /// The requested computation is not supported.
    ///
    /// Currently only raised for the open neighborhood of a node.
    #[error("Not supported - {0}")]
    NotSupported(&'static str),

    /// Generic error for miscellaneous graph failures.
    #[error("{0}")]
    GraphError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_error_macro() {
        let err = topology_error!("prism", "needs {} nodes", 6);
        match &err {
            Error::InvalidTopology {
                topology,
                message,
                file,
                line,
            } => {
                assert_eq!(*topology, "prism");
                assert_eq!(message, "needs 6 nodes");
                assert!(file.ends_with("error.rs"));
                assert!(*line > 0);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(err.to_string().starts_with("Invalid prism topology"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::MissingEndpoint("7".into()).to_string(),
            "Edge endpoint 7 is not a node of the graph"
        );
        assert_eq!(
            Error::InvalidProbability(1.5).to_string(),
            "Probability must be within [0, 1], got 1.5"
        );
        assert_eq!(
            Error::NotSupported("open neighborhood").to_string(),
            "Not supported - open neighborhood"
        );
    }
}
