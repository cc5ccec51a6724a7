//! End-to-end scenarios assembled from raw instructions and run against an
//! in-memory stdin/stdout, mirroring the way the teacher's own `tests/`
//! directory drives the interpreter through public entry points only.

use std::io::Cursor;

use um_asm::Instruction;
use um_vm::{Fault, Machine, RunError};

fn assemble(instructions: &[Instruction]) -> Vec<u32> {
    instructions.iter().map(Instruction::encode).collect()
}

fn run_with_input(program: &[Instruction], input: &[u8]) -> (Result<(), RunError>, Vec<u8>) {
    let words = assemble(program);
    let mut machine = Machine::new(words, Cursor::new(input.to_vec()), Vec::new());
    let result = machine.run();
    let output = machine.output().clone();
    (result, output)
}

#[test]
fn halt_only_exits_cleanly_with_no_output() {
    let (result, output) = run_with_input(&[Instruction::Halt], &[]);
    assert!(result.is_ok());
    assert!(output.is_empty());
}

#[test]
fn load_immediate_and_output_emits_ab() {
    let program = [
        Instruction::LoadImmediate { a: 1, imm: 0x41 },
        Instruction::LoadImmediate { a: 2, imm: 0x42 },
        Instruction::Output { c: 1 },
        Instruction::Output { c: 2 },
        Instruction::Halt,
    ];

    let (result, output) = run_with_input(&program, &[]);
    assert!(result.is_ok());
    assert_eq!(output, b"AB");
}

#[test]
fn map_unmap_is_lifo() {
    let program = [
        Instruction::LoadImmediate { a: 3, imm: 1 }, // segment length, reused for every map
        Instruction::Map { b: 1, c: 3 },              // r1 = first id (1)
        Instruction::Map { b: 2, c: 3 },              // r2 = second id (2)
        Instruction::Unmap { c: 2 },
        Instruction::Unmap { c: 1 },
        Instruction::Map { b: 4, c: 3 },               // r4 should reuse id 1
        Instruction::Output { c: 4 },
        Instruction::Halt,
    ];

    let (result, output) = run_with_input(&program, &[]);
    assert!(result.is_ok());
    assert_eq!(output, vec![0x01]);
}

#[test]
fn division_by_zero_is_fatal_and_produces_no_output() {
    let program = [
        Instruction::LoadImmediate { a: 1, imm: 1 },
        Instruction::LoadImmediate { a: 2, imm: 0 },
        Instruction::Divide { a: 0, b: 1, c: 2 },
    ];

    let (result, output) = run_with_input(&program, &[]);
    assert!(output.is_empty());

    match result {
        Err(RunError::Execution { fault: Fault::DivideByZero, pc: 2 }) => {}
        other => panic!("expected a divide-by-zero fault at pc 2, got {other:?}"),
    }
}

/// Copies segment 0 into a fresh segment word-by-word via a real dynamic
/// loop (counting down a register, not unrolled per offset — an unrolled
/// copy would need to copy its own copying code, which has no fixed point),
/// then replaces segment 0 with that copy and continues. Since the copy is
/// byte-identical, execution after the swap is indistinguishable from not
/// having swapped at all.
#[test]
fn self_loading_with_a_byte_identical_copy_is_unobservable() {
    use Instruction::*;

    // Addresses, fixed by construction below:
    const LOOP_START: u32 = 4;
    const EXIT: u32 = 14;
    const AFTER_FINAL_JUMP: u32 = 16;
    const PROGRAM_LEN: u32 = 17;

    let program = [
        /* 0  */ LoadImmediate { a: 0, imm: PROGRAM_LEN },
        /* 1  */ Map { b: 1, c: 0 },
        /* 2  */ LoadImmediate { a: 2, imm: 0 },
        /* 3  */ LoadImmediate { a: 6, imm: PROGRAM_LEN },
        /* 4  */ SegmentedLoad { a: 3, b: 7, c: 2 },
        /* 5  */ SegmentedStore { a: 1, b: 2, c: 3 },
        /* 6  */ LoadImmediate { a: 4, imm: 0xffff_ffff },
        /* 7  */ Add { a: 6, b: 6, c: 4 },
        /* 8  */ LoadImmediate { a: 5, imm: 1 },
        /* 9  */ Add { a: 2, b: 2, c: 5 },
        /* 10 */ LoadImmediate { a: 3, imm: EXIT },
        /* 11 */ LoadImmediate { a: 4, imm: LOOP_START },
        /* 12 */ ConditionalMove { a: 3, b: 4, c: 6 },
        /* 13 */ LoadProgram { b: 7, c: 3 },
        /* 14 */ LoadImmediate { a: 3, imm: AFTER_FINAL_JUMP },
        /* 15 */ LoadProgram { b: 1, c: 3 },
        /* 16 */ Halt,
    ];
    assert_eq!(program.len() as u32, PROGRAM_LEN);

    let (result, output) = run_with_input(&program, &[]);
    assert!(result.is_ok(), "expected clean halt, got {result:?}");
    assert!(output.is_empty());
}

#[test]
fn echo_copies_stdin_to_stdout_until_end_of_stream() {
    use Instruction::*;

    const DO_OUTPUT: u32 = 7;
    const HALT_ADDR: u32 = 10;
    const LOOP_START: u32 = 2;

    let program = [
        /* 0 */ LoadImmediate { a: 4, imm: DO_OUTPUT },
        /* 1 */ LoadImmediate { a: 5, imm: HALT_ADDR },
        /* 2 */ Input { c: 1 },
        /* 3 */ Nand { a: 2, b: 1, c: 1 },
        /* 4 */ Add { a: 3, b: 5, c: 0 },
        /* 5 */ ConditionalMove { a: 3, b: 4, c: 2 },
        /* 6 */ LoadProgram { b: 0, c: 3 },
        /* 7 */ Output { c: 1 },
        /* 8 */ LoadImmediate { a: 3, imm: LOOP_START },
        /* 9 */ LoadProgram { b: 0, c: 3 },
        /* 10 */ Halt,
    ];

    let (result, output) = run_with_input(&program, b"hello");
    assert!(result.is_ok(), "expected clean halt, got {result:?}");
    assert_eq!(output, b"hello");
}
