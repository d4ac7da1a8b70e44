//! Parse-then-dispatch tests against recording engines

use std::cell::RefCell;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use readahead::application::ports::{Analyzer, Collector, EngineError, Replayer};
use readahead::application::{DispatchError, DispatchUseCase, InputList};
use readahead::cli::{parse_args, CliError, Parsed};
use readahead::domain::config::Settings;
use readahead::domain::Verb;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Collect {
        root: PathBuf,
        files_max: u32,
        timeout_secs: u64,
        input: Option<Vec<PathBuf>>,
    },
    Replay {
        root: Option<PathBuf>,
        file_size_max: u64,
    },
    Analyze(Option<PathBuf>),
}

#[derive(Clone, Default)]
struct RecordingEngine {
    calls: Rc<RefCell<Vec<Call>>>,
    fail: bool,
}

impl RecordingEngine {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn finish(&self, call: Call) -> Result<(), EngineError> {
        self.calls.borrow_mut().push(call);
        if self.fail {
            Err(EngineError::Failed("engine reported failure".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Collector for RecordingEngine {
    fn collect(
        &self,
        root: &Path,
        settings: &Settings,
        input: Option<&mut InputList>,
    ) -> Result<(), EngineError> {
        let input = match input {
            Some(list) => Some(list.entries().map_err(|source| EngineError::Io {
                path: list.path().to_path_buf(),
                source,
            })?),
            None => None,
        };
        self.finish(Call::Collect {
            root: root.to_path_buf(),
            files_max: settings.files_max.get(),
            timeout_secs: settings.timeout.as_secs(),
            input,
        })
    }
}

impl Replayer for RecordingEngine {
    fn replay(&self, root: Option<&Path>, settings: &Settings) -> Result<(), EngineError> {
        self.finish(Call::Replay {
            root: root.map(Path::to_path_buf),
            file_size_max: settings.file_size_max.get(),
        })
    }
}

impl Analyzer for RecordingEngine {
    fn analyze(&self, pack: Option<&Path>) -> Result<(), EngineError> {
        self.finish(Call::Analyze(pack.map(Path::to_path_buf)))
    }
}

fn run(engine: &RecordingEngine, args: &[&str]) -> Result<Verb, DispatchError> {
    let mut argv = vec!["readahead"];
    argv.extend_from_slice(args);

    let invocation = match parse_args(argv, Settings::defaults()) {
        Ok(Parsed::Run(invocation)) => invocation,
        other => panic!("Expected an invocation, got {:?}", other),
    };

    let use_case = DispatchUseCase::new(engine.clone(), engine.clone(), engine.clone());
    use_case.execute(invocation)
}

#[test]
fn collect_boot_with_limits() {
    let engine = RecordingEngine::default();
    let verb = run(&engine, &["--files-max=100", "--timeout=30", "collect", "/boot"]).unwrap();

    assert_eq!(verb, Verb::Collect);
    assert_eq!(
        engine.calls(),
        vec![Call::Collect {
            root: PathBuf::from("/boot"),
            files_max: 100,
            timeout_secs: 30,
            input: None,
        }]
    );
}

#[test]
fn collect_defaults_to_root_directory() {
    let engine = RecordingEngine::default();
    run(&engine, &["collect"]).unwrap();

    match engine.calls().as_slice() {
        [Call::Collect { root, files_max, .. }] => {
            assert_eq!(root, Path::new("/"));
            assert_eq!(*files_max, 16384);
        }
        calls => panic!("Unexpected calls: {:?}", calls),
    }
}

#[test]
fn collect_receives_input_list() {
    let mut list = tempfile::NamedTempFile::new().unwrap();
    writeln!(list, "/usr/bin/bash").unwrap();
    writeln!(list, "/usr/lib/libc.so.6").unwrap();
    let arg = format!("--filelist={}", list.path().display());

    let engine = RecordingEngine::default();
    run(&engine, &[&arg, "collect", "/"]).unwrap();

    match engine.calls().as_slice() {
        [Call::Collect { input, .. }] => assert_eq!(
            input.as_deref(),
            Some(
                &[
                    PathBuf::from("/usr/bin/bash"),
                    PathBuf::from("/usr/lib/libc.so.6")
                ][..]
            )
        ),
        calls => panic!("Unexpected calls: {:?}", calls),
    }
}

#[test]
fn replay_without_target_passes_none() {
    let engine = RecordingEngine::default();
    run(&engine, &["--file-size-max=4096", "replay"]).unwrap();

    assert_eq!(
        engine.calls(),
        vec![Call::Replay {
            root: None,
            file_size_max: 4096,
        }]
    );
}

#[test]
fn analyze_pack_file() {
    let engine = RecordingEngine::default();
    let verb = run(&engine, &["analyze", "pack.bin"]).unwrap();

    assert_eq!(verb, Verb::Analyze);
    assert_eq!(
        engine.calls(),
        vec![Call::Analyze(Some(PathBuf::from("pack.bin")))]
    );
}

#[test]
fn analyze_without_target_passes_none() {
    let engine = RecordingEngine::default();
    run(&engine, &["analyze"]).unwrap();
    assert_eq!(engine.calls(), vec![Call::Analyze(None)]);
}

#[test]
fn unknown_verb_invokes_nothing() {
    let engine = RecordingEngine::default();
    let err = run(&engine, &["foobar", "/boot"]).unwrap_err();

    assert!(matches!(err, DispatchError::UnknownVerb(_)));
    assert_eq!(err.to_string(), "Unknown verb foobar.");
    assert!(engine.calls().is_empty());
}

#[test]
fn engine_failure_is_propagated() {
    let engine = RecordingEngine::failing();
    let err = run(&engine, &["replay", "/"]).unwrap_err();

    match err {
        DispatchError::Engine { verb, source } => {
            assert_eq!(verb, Verb::Replay);
            assert!(matches!(source, EngineError::Failed(_)));
        }
        other => panic!("Expected engine error, got {:?}", other),
    }
    assert_eq!(engine.calls().len(), 1);
}

#[test]
fn invalid_options_never_reach_dispatch() {
    let result = parse_args(["readahead", "--files-max=0", "collect"], Settings::defaults());
    assert!(matches!(result, Err(CliError::Validation { .. })));
}
