// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sv check` specs: real `sh` snippets end to end.

use crate::prelude::*;

#[test]
fn passing_snippet_exits_zero() {
    let temp = Project::empty();
    temp.file(
        "guide.org",
        "* Greetings\n\
         #+begin_src sh\n\
         echo hello\n\
         #+end_src\n\
         \n\
         #+RESULTS:\n\
         : hello\n",
    );

    temp.sv()
        .args(&["check"])
        .passes()
        .stdout_has("1 snippets: 1 passed");
}

#[test]
fn mismatch_shows_labeled_diff_and_fails() {
    let temp = Project::empty();
    temp.file(
        "guide.org",
        "* Greetings\n\
         #+begin_src sh\n\
         echo goodbye\n\
         #+end_src\n\
         \n\
         #+RESULTS:\n\
         : hello\n",
    );

    temp.sv()
        .args(&["check"])
        .fails()
        .stdout_has("MISMATCH guide.org#Greetings#1")
        .stdout_has("- hello")
        .stdout_has("+ goodbye")
        .stdout_has("1 mismatch");
}

#[test]
fn example_block_oracle_is_honored() {
    let temp = Project::empty();
    temp.file(
        "guide.org",
        "* Counting\n\
         #+begin_src sh\n\
         printf 'one\\ntwo\\n'\n\
         #+end_src\n\
         #+begin_example\n\
         one\n\
         two\n\
         #+end_example\n",
    );

    temp.sv().args(&["check"]).passes();
}

#[test]
fn snippet_without_oracle_is_informational() {
    let temp = Project::empty();
    temp.file(
        "guide.org",
        "* Notes\n\
         #+begin_src sh\n\
         echo anything\n\
         #+end_src\n",
    );

    temp.sv()
        .args(&["check"])
        .passes()
        .stdout_has("(1 informational)");
}

#[test]
fn no_capture_snippet_is_never_executed() {
    // The body would exit non-zero if run; the tag keeps it documentation-only.
    let temp = Project::empty();
    temp.file(
        "guide.org",
        "* Broken on purpose\n\
         #+begin_src sh :no-capture\n\
         exit 1\n\
         #+end_src\n",
    );

    temp.sv()
        .args(&["check"])
        .passes()
        .stdout_has("(1 informational)");
}

#[test]
fn nonzero_exit_is_an_error() {
    let temp = Project::empty();
    temp.file(
        "guide.org",
        "* Flaky\n\
         #+begin_src sh\n\
         echo oops >&2\n\
         exit 3\n\
         #+end_src\n\
         \n\
         #+RESULTS:\n\
         : fine\n",
    );

    temp.sv()
        .args(&["check"])
        .fails()
        .stdout_has("ERROR guide.org#Flaky#1")
        .stdout_has("exit code 3")
        .stdout_has("oops");
}

#[test]
fn slow_snippet_times_out() {
    let temp = Project::empty();
    temp.file(
        "guide.org",
        "* Slow\n\
         #+begin_src sh\n\
         sleep 30\n\
         #+end_src\n\
         \n\
         #+RESULTS:\n\
         : done\n",
    );

    temp.sv()
        .args(&["check", "--timeout", "1"])
        .fails()
        .stdout_has("TIMEOUT guide.org#Slow#1")
        .stdout_has("1 timeout");
}

#[test]
fn malformed_document_does_not_abort_the_run() {
    let temp = Project::empty();
    temp.file(
        "good.org",
        "* Fine\n\
         #+begin_src sh\n\
         echo ok\n\
         #+end_src\n\
         \n\
         #+RESULTS:\n\
         : ok\n",
    );
    temp.file(
        "bad.org",
        "* Broken\n\
         #+begin_src sh\n\
         echo never closed\n",
    );

    temp.sv()
        .args(&["check"])
        .fails()
        .stdout_has("PARSE bad.org: unterminated source block opened at line 2")
        .stdout_has("1 passed")
        .stdout_has("1 document(s) failed to parse");
}

#[test]
fn missing_documents_are_fatal() {
    let temp = Project::empty();
    temp.sv()
        .args(&["check"])
        .exit_code(2)
        .stderr_has("no documents found");
}

#[test]
fn filter_runs_matching_snippets_only() {
    let temp = Project::empty();
    temp.file(
        "maps.org",
        "* Maps\n\
         #+begin_src sh\n\
         echo maps\n\
         #+end_src\n\
         \n\
         #+RESULTS:\n\
         : maps\n",
    );
    temp.file(
        "sets.org",
        "* Sets\n\
         #+begin_src sh\n\
         echo wrong\n\
         #+end_src\n\
         \n\
         #+RESULTS:\n\
         : sets\n",
    );

    // Only maps.org runs; the failing sets.org snippet is filtered out.
    temp.sv()
        .args(&["check", "--filter", "maps"])
        .passes()
        .stdout_has("1 snippets: 1 passed");
}

#[test]
fn json_report_carries_summary_and_outcomes() {
    let temp = Project::empty();
    temp.file(
        "guide.org",
        "* Greetings\n\
         #+begin_src sh\n\
         echo goodbye\n\
         #+end_src\n\
         \n\
         #+RESULTS:\n\
         : hello\n",
    );

    let out = temp.sv().args(&["check", "--output", "json"]).fails();
    let json = out.json();
    assert_eq!(json["summary"]["total"], 1);
    assert_eq!(json["summary"]["mismatches"], 1);
    assert_eq!(json["outcomes"][0]["kind"], "mismatch");
    assert!(json["outcomes"][0]["diff"].as_str().unwrap().contains("+ goodbye"));
}

#[test]
fn config_file_defines_extra_languages() {
    let temp = Project::empty();
    temp.file(
        "sv.toml",
        r#"
[lang.shell]
command = ["sh", "{file}"]
extension = "sh"
"#,
    );
    temp.file(
        "guide.org",
        "* Aliased language\n\
         #+begin_src shell\n\
         echo aliased\n\
         #+end_src\n\
         \n\
         #+RESULTS:\n\
         : aliased\n",
    );

    temp.sv().args(&["check"]).passes();
}

#[test]
fn unknown_language_is_an_error_outcome() {
    let temp = Project::empty();
    temp.file(
        "guide.org",
        "* Exotic\n\
         #+begin_src brainfuck\n\
         +++\n\
         #+end_src\n\
         \n\
         #+RESULTS:\n\
         : x\n",
    );

    temp.sv()
        .args(&["check"])
        .fails()
        .stdout_has("ERROR")
        .stdout_has("brainfuck");
}

#[test]
fn explicit_paths_override_directory_scan() {
    let temp = Project::empty();
    temp.file(
        "docs/a.org",
        "* A\n\
         #+begin_src sh\n\
         echo a\n\
         #+end_src\n\
         \n\
         #+RESULTS:\n\
         : a\n",
    );
    temp.file(
        "docs/b.org",
        "* B\n\
         #+begin_src sh\n\
         echo broken\n\
         #+end_src\n\
         \n\
         #+RESULTS:\n\
         : b\n",
    );

    temp.sv()
        .args(&["check", "docs/a.org"])
        .passes()
        .stdout_has("1 snippets: 1 passed");
}

#[test]
fn bad_config_file_is_fatal() {
    let temp = Project::empty();
    temp.file("sv.toml", "timeout_secs = \"soon\"\n");
    temp.file(
        "guide.org",
        "* A\n\
         #+begin_src sh\n\
         echo a\n\
         #+end_src\n",
    );

    temp.sv()
        .args(&["check"])
        .exit_code(2)
        .stderr_has("sv.toml");
}
