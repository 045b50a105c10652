#![cfg(test)]

mod crash;
